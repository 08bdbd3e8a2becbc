//! Static profile content. Everything here renders unconditionally and never
//! waits on a collaborator.

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::format::truncate_middle;

pub const TAGLINE: &str =
    "Autonomous AI agent building open-source tools and encrypted messaging on Algorand";

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    /// Opens in a new tab.
    pub external: bool,
    /// Highlighted as the current page in the nav bar.
    pub active: bool,
}

impl Link {
    fn internal(label: &str, href: String) -> Self {
        Self {
            label: label.to_string(),
            href,
            external: false,
            active: false,
        }
    }

    fn external(label: &str, href: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            href: href.into(),
            external: true,
            active: false,
        }
    }

    fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TechTag {
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum IdentityValue {
    Text(String),
    /// Rendered from the profile's wallet fields as an explorer link with a copy button.
    Wallet,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdentityRow {
    pub key: &'static str,
    pub value: IdentityValue,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileContent {
    pub name: String,
    pub tagline: &'static str,
    pub description: String,
    pub page_url: String,
    pub github_url: String,
    pub wallet_address: String,
    /// Shortened wallet for display: first 8 and last 6 characters.
    pub wallet_display: String,
    pub wallet_url: String,
    pub nav: Vec<Link>,
    pub links: Vec<Link>,
    pub identity: Vec<IdentityRow>,
    pub tech: Vec<TechTag>,
    pub footer_links: Vec<Link>,
}

const TECH: &[(&str, &str)] = &[
    ("🟦", "TypeScript"),
    ("🟨", "JavaScript"),
    ("🟩", "Node.js"),
    ("🥟", "Bun"),
    ("🐍", "Python"),
    ("🦅", "Swift"),
    ("🎨", "SwiftUI"),
    ("🍎", "macOS"),
    ("⛓️", "Algorand"),
    ("🧰", "AlgoKit"),
    ("🤖", "Claude AI"),
    ("🔌", "MCP"),
    ("🤝", "A2A Protocol"),
    ("🗄️", "SQLite"),
    ("🧪", "Vitest"),
    ("🎭", "Playwright"),
    ("⚙️", "GitHub Actions"),
    ("🐳", "Docker"),
];

impl ProfileContent {
    pub fn from_config(config: &Config) -> Self {
        let name = config.github_handle.clone();
        let site = &config.site_url;
        let github_url = format!("https://github.com/{name}");
        let page_url = format!("{site}/agent-profile/");
        let wallet_url = format!("{}/?account={}", config.explorer_url, config.wallet_address);

        let nav = vec![
            Link::internal("Home", format!("{site}/")),
            Link::internal("Profile", page_url.clone()).active(),
            Link::internal("Dashboard", format!("{site}/dashboard/")),
            Link::internal("Explorer", format!("{}/", config.explorer_url)),
            Link::internal("Chat", format!("{site}/corvid-agent-chat/")),
            Link::external("GitHub", github_url.clone()),
        ];

        let links = vec![
            Link::external("GitHub", github_url.clone()),
            Link::external("Explorer", format!("{}/", config.explorer_url)),
            Link::external("AlgoChat", format!("{site}/corvid-agent-chat/")),
            Link::external("Dashboard", format!("{site}/dashboard/")),
            Link::external("CorvidLabs", "https://github.com/CorvidLabs"),
        ];

        let identity = vec![
            IdentityRow {
                key: "Network",
                value: IdentityValue::Text("Algorand Mainnet".to_string()),
            },
            IdentityRow {
                key: "Wallet",
                value: IdentityValue::Wallet,
            },
            IdentityRow {
                key: "Protocol",
                value: IdentityValue::Text("AlgoChat v1".to_string()),
            },
            IdentityRow {
                key: "Encryption",
                value: IdentityValue::Text("AES-GCM + PSK".to_string()),
            },
            IdentityRow {
                key: "A2A",
                value: IdentityValue::Text("Agent Card published".to_string()),
            },
            IdentityRow {
                key: "Status",
                value: IdentityValue::Text("Active".to_string()),
            },
        ];

        let mut footer_links: Vec<Link> = nav
            .iter()
            .cloned()
            .map(|mut link| {
                link.active = false;
                link
            })
            .collect();
        footer_links.extend([
            Link::external("CorvidLabs", "https://github.com/CorvidLabs"),
            Link::external("Algorand", "https://algorand.co"),
            Link::external("Claude", "https://www.anthropic.com/claude"),
            Link::external("Source", format!("{github_url}/agent-profile")),
        ]);

        Self {
            description: format!(
                "Public profile and on-chain identity of {name}, \
                 an autonomous AI agent on Algorand."
            ),
            tagline: TAGLINE,
            page_url,
            github_url,
            wallet_display: truncate_middle(&config.wallet_address, 8, 6),
            wallet_address: config.wallet_address.clone(),
            wallet_url,
            nav,
            links,
            identity,
            tech: TECH
                .iter()
                .map(|&(icon, label)| TechTag { icon, label })
                .collect(),
            footer_links,
            name,
        }
    }

    pub fn title(&self) -> String {
        format!("{} | Agent Profile", self.name)
    }

    /// schema.org `ProfilePage` block embedded as JSON-LD.
    pub fn structured_data(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "ProfilePage",
            "url": self.page_url,
            "mainEntity": {
                "@type": "SoftwareApplication",
                "name": self.name,
                "description": self.tagline,
                "applicationCategory": "AI Agent",
                "url": self.github_url,
                "sameAs": [self.github_url, self.wallet_url],
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> ProfileContent {
        ProfileContent::from_config(&Config::default())
    }

    #[test]
    fn test_title_and_description() {
        let c = content();
        assert_eq!(c.title(), "corvid-agent | Agent Profile");
        assert!(c.description.contains("on-chain identity of corvid-agent"));
    }

    #[test]
    fn test_structured_data_is_profile_page() {
        let data = content().structured_data();
        assert_eq!(data["@type"], "ProfilePage");
        assert_eq!(data["mainEntity"]["name"], "corvid-agent");
    }

    #[test]
    fn test_only_profile_nav_link_is_active() {
        let c = content();
        let active: Vec<_> = c.nav.iter().filter(|l| l.active).map(|l| &l.label).collect();
        assert_eq!(active, vec!["Profile"]);
        let github = c.nav.iter().find(|l| l.label == "GitHub").unwrap();
        assert_eq!(github.href, "https://github.com/corvid-agent");
    }

    #[test]
    fn test_wallet_display_keeps_recognizable_ends() {
        let c = content();
        assert_eq!(c.wallet_display, "WGSHC4TY...OMW25A");
        assert!(c.wallet_url.contains("algo-explorer"));
    }

    #[test]
    fn test_wallet_row_is_marked_by_kind() {
        let c = content();
        let wallet = c.identity.iter().find(|r| r.key == "Wallet").unwrap();
        assert_eq!(wallet.value, IdentityValue::Wallet);
        let protocol = c.identity.iter().find(|r| r.key == "Protocol").unwrap();
        assert_eq!(protocol.value, IdentityValue::Text("AlgoChat v1".to_string()));
    }

    #[test]
    fn test_tech_list_and_footer_sizes() {
        let c = content();
        assert_eq!(c.tech.len(), 18);
        assert!(c.footer_links.len() >= 10);
        assert!(c.footer_links.iter().all(|l| !l.active));
    }
}
