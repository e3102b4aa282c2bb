//! Prompt templates sent to the completion backend.

use crate::Intent;

pub(crate) fn classify(question: &str) -> String {
    format!(
        "Classify the following user question into EXACTLY ONE category.
Return ONLY the category name, nothing else.

Categories:
- crop_recommendation: Questions about which crops to grow, farming suggestions
- nutrition_recommendation: Questions about diet, food for health conditions, nutrition plans
- explanation: Questions asking \"why\", \"how\", or details about a specific crop or food
- general: General greetings, unclear questions, or off-topic queries

Question: \"{question}\"

Category:"
    )
}

pub(crate) fn extract_condition(question: &str) -> String {
    format!(
        "Extract the health condition or deficiency mentioned in this question.
Return ONLY the condition name (like \"anemia\", \"diabetes\", \"iron deficiency\", etc.).
If no specific condition is mentioned, return \"general\".

Question: \"{question}\"

Condition:"
    )
}

pub(crate) fn extract_subject(question: &str) -> String {
    format!(
        "Extract the main crop or food item being asked about.
Return ONLY the name, nothing else.
If no specific item is mentioned, return \"none\".

Question: \"{question}\"

Item:"
    )
}

pub(crate) fn paraphrase(question: &str, intent: Intent, data: &str) -> String {
    format!(
        "Convert the following recommendation data into a friendly, conversational response.

Original Question: \"{question}\"
Intent: {intent}

Data:
{data}

Instructions:
- Be concise and friendly
- Address the user's question directly
- Use simple language
- Do not add facts not in the data
- Keep response under 150 words
- For crop recommendations, mention 2-3 top crops
- For nutrition plans, mention 2-3 key foods
- Sound helpful and supportive

Response:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn classifier_prompt_lists_every_intent() {
        let prompt = classify("What should I grow?");
        for intent in Intent::ALL {
            assert!(prompt.contains(&format!("- {intent}: ")), "{intent} missing");
        }
        assert!(prompt.ends_with("Question: \"What should I grow?\"\n\nCategory:"));
    }

    #[rstest]
    fn paraphrase_prompt_embeds_the_data() {
        let prompt = paraphrase("Why wheat?", Intent::Explanation, "{\n  \"a\": 1\n}");
        assert!(prompt.contains("Intent: explanation\n\nData:\n{\n  \"a\": 1\n}\n\nInstructions:"));
    }
}
