//! Mock lead search, email personalization and CSV export

use serde::{Deserialize, Serialize};

use crate::core::DemoError;

/// Delay before mock search results appear, in milliseconds
pub const SEARCH_DELAY_MS: u32 = 1500;

/// How long the "Copied" badge stays on a contact, in milliseconds
pub const COPIED_RESET_MS: u32 = 2000;

pub const CSV_FILENAME: &str = "lead_targets.csv";
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

const CSV_HEADERS: [&str; 5] = ["Name", "Position", "Company", "Email", "LinkedIn"];

/// A contact returned by the lead finder
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub position: String,
    pub company: String,
    pub email: String,
    pub linkedin: Option<String>,
}

impl Target {
    fn new(
        name: &str,
        position: &str,
        company: &str,
        email: &str,
        linkedin: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            position: position.to_string(),
            company: company.to_string(),
            email: email.to_string(),
            linkedin: linkedin.map(str::to_string),
        }
    }

    /// Absolute LinkedIn URL, if the contact has a profile
    pub fn linkedin_url(&self) -> Option<String> {
        self.linkedin
            .as_deref()
            .map(|profile| format!("https://{}", profile))
    }
}

/// Contacts plus the outreach template generated for them
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSearchResult {
    pub targets: Vec<Target>,
    pub email_template: String,
}

/// The fixed contact list every search returns
pub fn mock_targets() -> Vec<Target> {
    vec![
        Target::new(
            "Sarah Johnson",
            "Marketing Director",
            "TechCorp Solutions",
            "sarah.johnson@techcorp.com",
            Some("linkedin.com/in/sarahjohnson"),
        ),
        Target::new(
            "Michael Chen",
            "VP of Operations",
            "Global Innovations Inc.",
            "m.chen@globalinnovations.com",
            Some("linkedin.com/in/michaelchen"),
        ),
        Target::new(
            "Jessica Williams",
            "Chief Marketing Officer",
            "Nexus Enterprises",
            "j.williams@nexusent.com",
            None,
        ),
        Target::new(
            "Robert Davis",
            "Business Development Manager",
            "Pinnacle Group",
            "r.davis@pinnaclegroup.com",
            Some("linkedin.com/in/robertdavis"),
        ),
        Target::new(
            "Emma Thompson",
            "Director of Sales",
            "Horizon Industries",
            "e.thompson@horizonindustries.com",
            None,
        ),
    ]
}

/// Outreach email template for a prompt, with `{{name}}`, `{{company}}`
/// and `{{position}}` placeholders.
///
/// The subject switches to Marketing only on a lowercase "marketing".
pub fn email_template(prompt: &str) -> String {
    let focus = if prompt.contains("marketing") {
        "Marketing"
    } else {
        "Business"
    };

    format!(
        "Subject: Enhancing Your {focus} Strategy with LeadPilot

Dear {{{{name}}}},

I hope this email finds you well. I noticed your impressive work at {{{{company}}}} as the {{{{position}}}}.

I wanted to reach out because our AI-powered lead generation platform, LeadPilot, has been helping companies similar to {{{{company}}}} achieve significant growth in their outreach efforts.

Would you be open to a brief conversation about how we might be able to support your team's goals?

Looking forward to your response,
[Your Name]
LeadPilot"
    )
}

/// Ticket counter for in-flight searches.
///
/// Starting a search or resetting the panel bumps the counter, so a result
/// whose ticket is no longer current is dropped instead of shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchSequence {
    latest: u32,
}

impl SearchSequence {
    /// Start a search and return its ticket
    pub fn begin(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    /// Invalidate whatever search is in flight
    pub fn cancel(&mut self) {
        self.latest = self.latest.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: u32) -> bool {
        self.latest == ticket
    }
}

/// Run the mock search for a target-audience description.
pub fn search(prompt: &str) -> Result<LeadSearchResult, DemoError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(DemoError::EmptyInput);
    }

    Ok(LeadSearchResult {
        targets: mock_targets(),
        email_template: email_template(prompt),
    })
}

/// Fill a template's placeholders for one contact.
pub fn personalize(template: &str, target: &Target) -> String {
    template
        .replace("{{name}}", &target.name)
        .replace("{{company}}", &target.company)
        .replace("{{position}}", &target.position)
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render contacts as CSV: a header row, then one quoted row per contact.
pub fn to_csv(targets: &[Target]) -> String {
    let mut rows = Vec::with_capacity(targets.len() + 1);
    rows.push(CSV_HEADERS.join(","));

    for target in targets {
        let fields = [
            target.name.as_str(),
            target.position.as_str(),
            target.company.as_str(),
            target.email.as_str(),
            target.linkedin.as_deref().unwrap_or(""),
        ];
        rows.push(
            fields
                .iter()
                .map(|f| csv_field(f))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_targets_are_fixed() {
        let targets = mock_targets();
        assert_eq!(targets.len(), 5);
        assert_eq!(targets[0].name, "Sarah Johnson");
        assert_eq!(
            targets.iter().filter(|t| t.linkedin.is_none()).count(),
            2
        );
    }

    #[test]
    fn test_linkedin_url() {
        let targets = mock_targets();
        assert_eq!(
            targets[0].linkedin_url().as_deref(),
            Some("https://linkedin.com/in/sarahjohnson")
        );
        assert_eq!(targets[2].linkedin_url(), None);
    }

    #[test]
    fn test_email_template_subject() {
        assert!(
            email_template("Heads of marketing in Berlin")
                .starts_with("Subject: Enhancing Your Marketing Strategy with LeadPilot")
        );
        // Capitalized "Marketing" does not switch the subject
        assert!(
            email_template("Marketing directors at tech companies in San Francisco")
                .starts_with("Subject: Enhancing Your Business Strategy with LeadPilot")
        );
        assert!(
            email_template("CTOs at fintech startups")
                .starts_with("Subject: Enhancing Your Business Strategy with LeadPilot")
        );
    }

    #[test]
    fn test_search_sequence() {
        let mut searches = SearchSequence::default();
        let first = searches.begin();
        assert!(searches.is_current(first));

        let second = searches.begin();
        assert!(!searches.is_current(first));
        assert!(searches.is_current(second));

        searches.cancel();
        assert!(!searches.is_current(second));
    }

    #[test]
    fn test_email_template_placeholders() {
        let template = email_template("anything");
        assert!(template.contains("Dear {{name}},"));
        assert_eq!(template.matches("{{company}}").count(), 2);
        assert!(template.contains("as the {{position}}."));
    }

    #[test]
    fn test_search_rejects_blank_prompt() {
        assert_eq!(search("  "), Err(DemoError::EmptyInput));
    }

    #[test]
    fn test_search_returns_all_targets() {
        let result = search("Sales leaders at SaaS companies").unwrap();
        assert_eq!(result.targets, mock_targets());
        assert!(result.email_template.contains("Business Strategy"));
    }

    #[test]
    fn test_personalize_replaces_every_placeholder() {
        let target = &mock_targets()[1];
        let email = personalize(&email_template("marketing"), target);

        assert!(email.contains("Dear Michael Chen,"));
        assert!(email.contains("at Global Innovations Inc. as the VP of Operations."));
        assert!(email.contains("companies similar to Global Innovations Inc. achieve"));
        assert!(!email.contains("{{"));
    }

    #[test]
    fn test_to_csv_header_and_rows() {
        let targets = mock_targets();
        let csv = to_csv(&targets);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), targets.len() + 1);
        assert_eq!(lines[0], "Name,Position,Company,Email,LinkedIn");
        assert_eq!(
            lines[1],
            "\"Sarah Johnson\",\"Marketing Director\",\"TechCorp Solutions\",\"sarah.johnson@techcorp.com\",\"linkedin.com/in/sarahjohnson\""
        );
        assert!(lines[3].ends_with(",\"j.williams@nexusent.com\",\"\""));
    }

    #[test]
    fn test_to_csv_escapes_quotes() {
        let target = Target::new("Ann \"AJ\" Lee", "CEO", "Acme", "aj@acme.io", None);
        let csv = to_csv(&[target]);
        assert!(csv.ends_with("\"Ann \"\"AJ\"\" Lee\",\"CEO\",\"Acme\",\"aj@acme.io\",\"\""));
    }

    #[test]
    fn test_to_csv_empty() {
        assert_eq!(to_csv(&[]), "Name,Position,Company,Email,LinkedIn");
    }
}
