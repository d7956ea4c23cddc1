#[cfg(test)]
mod tests {
    use crate::core::chat::{self, ChatMessage, MessageRole};
    use crate::core::leads;
    use crate::core::wizard::{QUESTIONS, SubmitOutcome, Wizard};
    use crate::core::{DemoError, FormData};

    #[test]
    fn test_full_wizard_run() {
        let answers = [
            "Marketing Manager",
            "Tech Startups",
            "SaaS Platform",
            "Europe",
            "Our platform has helped similar companies achieve...",
            "LinkedIn",
        ];
        let mut wizard = Wizard::new();

        for (i, answer) in answers.iter().enumerate() {
            assert_eq!(wizard.current_question(), Some(QUESTIONS[i]));
            let outcome = wizard.submit(answer).unwrap();
            if i + 1 < answers.len() {
                assert_eq!(outcome, SubmitOutcome::Advanced);
            } else {
                assert_eq!(outcome, SubmitOutcome::Completed);
            }
        }

        assert!(wizard.is_complete());
        assert_eq!(wizard.answered().len(), 6);
        assert_eq!(wizard.current_question(), None);
        assert!(wizard.current_suggestions().is_empty());
        assert_eq!(wizard.status_label(), "All questions completed!");
        assert_eq!(wizard.progress_percent(), 100.0);

        let data = wizard.form_data().unwrap();
        assert_eq!(
            data,
            FormData {
                profession: "Marketing Manager".to_string(),
                target_audience: "Tech Startups".to_string(),
                offering: "SaaS Platform".to_string(),
                region: "Europe".to_string(),
                message: "Our platform has helped similar companies achieve...".to_string(),
                platform: "LinkedIn".to_string(),
            }
        );
    }

    #[test]
    fn test_wizard_blank_answers_do_not_count() {
        let mut wizard = Wizard::new();
        wizard.submit("Entrepreneur").unwrap();
        wizard.submit("").unwrap();
        wizard.submit("  \t").unwrap();
        assert_eq!(wizard.index(), 1);
        assert_eq!(wizard.answered().len(), 1);
    }

    #[test]
    fn test_wizard_back_from_completion() {
        let mut wizard = Wizard::new();
        for q in QUESTIONS {
            wizard.submit(q).unwrap();
        }
        assert_eq!(wizard.back(), Some(QUESTIONS[5].to_string()));
        assert!(!wizard.is_complete());
        assert_eq!(wizard.status_label(), "Question 6 of 6");
        assert_eq!(wizard.submit("Email"), Ok(SubmitOutcome::Completed));
        assert_eq!(wizard.form_data().unwrap().platform, "Email");
    }

    #[test]
    fn test_conversation_flow() {
        let mut messages = vec![ChatMessage::greeting()];

        let prompt = "How much does the Starter plan cost?";
        messages.push(ChatMessage::user(prompt));
        let reply = chat::respond(prompt).unwrap_or_else(|_| ChatMessage::assistant(chat::FALLBACK_REPLY));
        messages.push(reply);

        let roles: Vec<MessageRole> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MessageRole::Assistant, MessageRole::User, MessageRole::Assistant]
        );
        assert_eq!(messages[2].content, chat::PRICING_REPLY);
    }

    #[test]
    fn test_failed_reply_falls_back() {
        let reply = chat::respond("   ")
            .unwrap_or_else(|_| ChatMessage::assistant(chat::FALLBACK_REPLY));
        assert_eq!(reply.content, "Sorry, I encountered an error. Please try again.");
    }

    #[test]
    fn test_lead_search_to_export() {
        let result = leads::search("Marketing directors at tech companies in San Francisco").unwrap();
        assert!(result.email_template.contains("Business Strategy"));

        let csv = leads::to_csv(&result.targets);
        assert_eq!(csv.lines().count(), 1 + result.targets.len());

        for target in &result.targets {
            let email = leads::personalize(&result.email_template, target);
            assert!(email.contains(&format!("Dear {},", target.name)));
            assert!(csv.contains(&format!("\"{}\"", target.email)));
        }
    }

    #[test]
    fn test_lead_search_blank_prompt() {
        assert_eq!(leads::search("\n"), Err(DemoError::EmptyInput));
    }
}
