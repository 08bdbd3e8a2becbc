//! HTML writer for the profile page. Element ids and classes are the page's
//! public contract and are asserted on by the tests below.

use std::fmt::Write;

use crate::format::PLACEHOLDER;
use crate::profile::{IdentityValue, Link, ProfileContent};
use crate::render::ProfilePage;
use crate::sections::Section;

const STYLE: &str = r#"
:root { --bg: #0b0d12; --card: #141821; --border: #232838; --text: #b7bfd0; --text-bright: #f2f5fb; --accent: #7c5cff; --green: #3ddc84; --red: #ff5c7a; }
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--text); font-family: system-ui, sans-serif; }
#bg-canvas { position: fixed; inset: 0; z-index: -1; }
nav.nav { position: sticky; top: 0; z-index: 10; display: flex; justify-content: space-between; padding: 12px 24px; background: rgba(11, 13, 18, 0.9); border-bottom: 1px solid var(--border); }
.nav-links a, footer a { color: var(--text); margin-left: 16px; text-decoration: none; }
main { max-width: 1100px; margin: 0 auto; padding: 24px; }
.gradient { background: linear-gradient(90deg, var(--accent), var(--green)); -webkit-background-clip: text; color: transparent; }
.stats-row { display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; }
.card, .stat-box { background: var(--card); border: 1px solid var(--border); border-radius: 12px; padding: 16px; margin-top: 16px; }
.contrib-graph { display: flex; gap: 3px; overflow-x: auto; }
.contrib-week { display: flex; flex-direction: column; gap: 3px; }
.contrib-cell { width: 10px; height: 10px; border-radius: 2px; background: #1b2030; }
.contrib-cell.level-1 { background: #2b3f6b; } .contrib-cell.level-2 { background: #4059a8; }
.contrib-cell.level-3 { background: #5f6fe0; } .contrib-cell.level-4 { background: var(--accent); }
.txn-amount.negative { color: var(--red); } .txn-amount.positive { color: var(--green); }
.tech-grid { display: flex; flex-wrap: wrap; gap: 8px; }
"#;

/// Minimal HTML escaping for text nodes and double-quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(page: &ProfilePage, profile: &ProfileContent) -> String {
    let mut html = String::with_capacity(64 * 1024);
    // Writing into a String cannot fail.
    let _ = write_document(&mut html, page, profile);
    html
}

fn write_document(out: &mut String, page: &ProfilePage, p: &ProfileContent) -> std::fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    write_head(out, p)?;
    writeln!(out, "<body>")?;
    writeln!(out, "<canvas id=\"bg-canvas\" aria-hidden=\"true\"></canvas>")?;
    writeln!(
        out,
        "<noscript><p class=\"noscript\">The animated background needs JavaScript; \
         all profile data below is rendered on the server.</p></noscript>"
    )?;
    write_nav(out, p)?;
    writeln!(out, "<main>")?;
    write_profile_card(out, p)?;
    write_stats(out, page)?;
    write_repos(out, page)?;
    write_activity(out, page)?;
    write_contributions(out, page)?;
    write_identity(out, p)?;
    write_holdings(out, page)?;
    write_transactions(out, page)?;
    write_tech(out, p)?;
    writeln!(out, "</main>")?;
    write_footer(out, p)?;
    writeln!(out, "</body>\n</html>")
}

fn write_head(out: &mut String, p: &ProfileContent) -> std::fmt::Result {
    let title = escape(&p.title());
    let description = escape(&p.description);
    // `</` inside a script element would end it early.
    let json_ld = p.structured_data().to_string().replace("</", "<\\/");

    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )?;
    writeln!(out, "<title>{title}</title>")?;
    writeln!(out, "<meta name=\"description\" content=\"{description}\">")?;
    writeln!(out, "<meta property=\"og:title\" content=\"{title}\">")?;
    writeln!(out, "<meta property=\"og:type\" content=\"profile\">")?;
    writeln!(out, "<meta property=\"og:description\" content=\"{description}\">")?;
    writeln!(out, "<meta property=\"og:url\" content=\"{}\">", escape(&p.page_url))?;
    writeln!(out, "<meta name=\"twitter:card\" content=\"summary\">")?;
    writeln!(out, "<script type=\"application/ld+json\">{json_ld}</script>")?;
    writeln!(out, "<style>{STYLE}</style>")?;
    writeln!(out, "</head>")
}

fn link_attrs(link: &Link) -> String {
    let mut attrs = format!("href=\"{}\"", escape(&link.href));
    if link.external {
        attrs.push_str(" target=\"_blank\" rel=\"noopener\"");
    }
    if link.active {
        attrs.push_str(" style=\"color: var(--text-bright)\" aria-current=\"page\"");
    }
    attrs
}

fn write_nav(out: &mut String, p: &ProfileContent) -> std::fmt::Result {
    writeln!(out, "<nav class=\"nav\">")?;
    writeln!(
        out,
        "<a class=\"nav-logo\" href=\"{}\"><span>{}</span></a>",
        escape(&p.page_url),
        escape(&p.name)
    )?;
    writeln!(out, "<div class=\"nav-links\">")?;
    for link in &p.nav {
        writeln!(out, "<a {}>{}</a>", link_attrs(link), escape(&link.label))?;
    }
    writeln!(out, "</div>\n</nav>")
}

fn write_profile_card(out: &mut String, p: &ProfileContent) -> std::fmt::Result {
    let name = escape(&p.name);
    writeln!(out, "<section class=\"profile-card\">")?;
    writeln!(
        out,
        "<div class=\"avatar-ring\"><div class=\"avatar-inner\">{}</div></div>",
        escape(&p.name.chars().next().unwrap_or('?').to_uppercase().to_string())
    )?;
    writeln!(
        out,
        "<h1 class=\"profile-name\"><span class=\"gradient\">{name}</span></h1>"
    )?;
    writeln!(out, "<p class=\"profile-tagline\">{}</p>", escape(p.tagline))?;
    writeln!(out, "<div class=\"profile-badges\">")?;
    writeln!(
        out,
        "<span class=\"badge badge-online\"><span class=\"badge-dot green\"></span>Online</span>"
    )?;
    writeln!(out, "<span class=\"badge badge-chain\">Algorand Mainnet</span>")?;
    writeln!(out, "<span class=\"badge badge-ai\">Claude-powered</span>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "<div class=\"profile-links\">")?;
    for link in &p.links {
        writeln!(
            out,
            "<a class=\"profile-link\" {}>{}</a>",
            link_attrs(link),
            escape(&link.label)
        )?;
    }
    writeln!(out, "</div>\n</section>")
}

fn write_stats(out: &mut String, page: &ProfilePage) -> std::fmt::Result {
    let boxes = [
        ("stat-repos", &page.stats.repos, "Repositories"),
        ("stat-stars", &page.stats.stars, "Stars"),
        ("stat-packages", &page.stats.packages, "Packages"),
        ("stat-balance", &page.stats.balance, "ALGO Balance"),
    ];
    writeln!(out, "<section class=\"stats-row\">")?;
    for (id, value, label) in boxes {
        writeln!(
            out,
            "<div class=\"stat-box\"><div class=\"stat-value\" id=\"{id}\">{}</div>\
             <div class=\"stat-label\">{label}</div></div>",
            escape(value)
        )?;
    }
    writeln!(out, "</section>")
}

fn card_open(
    out: &mut String,
    title: &str,
    badge: &str,
    badge_id: Option<&str>,
) -> std::fmt::Result {
    let id_attr = badge_id.map(|id| format!(" id=\"{id}\"")).unwrap_or_default();
    writeln!(
        out,
        "<section class=\"card\"><div class=\"card-header\"><h2 class=\"card-title\">{title}</h2>\
         <span class=\"card-badge\"{id_attr}>{}</span></div>",
        escape(badge)
    )
}

fn write_repos(out: &mut String, page: &ProfilePage) -> std::fmt::Result {
    let badge = page
        .repos
        .populated()
        .map(|r| r.owned_label())
        .unwrap_or_default();
    card_open(out, "Repositories", &badge, Some("repo-count"))?;
    writeln!(out, "<div id=\"repos-list\" class=\"repos-list\">")?;
    if let Section::Populated(summary) = &page.repos {
        for repo in &summary.items {
            writeln!(out, "<div class=\"repo-item\">")?;
            writeln!(
                out,
                "<a class=\"repo-name\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                escape(&repo.url),
                escape(&repo.name)
            )?;
            writeln!(out, "<p class=\"repo-desc\">{}</p>", escape(&repo.description))?;
            write!(out, "<div class=\"repo-meta\">")?;
            if let Some(lang) = &repo.language {
                write!(out, "<span class=\"repo-lang\">{}</span>", escape(lang))?;
            }
            if repo.stars > 0 {
                write!(out, "<span class=\"repo-star\">&#9733; {}</span>", repo.stars)?;
            }
            if let Some(updated) = &repo.updated {
                write!(out, "<span class=\"repo-updated\">{}</span>", escape(updated))?;
            }
            writeln!(out, "</div>\n</div>")?;
        }
    }
    writeln!(out, "</div>\n</section>")
}

fn write_activity(out: &mut String, page: &ProfilePage) -> std::fmt::Result {
    card_open(out, "Recent Activity", "github", None)?;
    writeln!(out, "<div id=\"activity-feed\" class=\"activity-feed\">")?;
    if let Section::Populated(items) = &page.activity {
        for item in items {
            writeln!(
                out,
                "<div class=\"activity-item\" data-type=\"{}\">\
                 <span class=\"activity-text\">{} <code>{}</code></span>\
                 <span class=\"activity-time\">{}</span></div>",
                escape(&item.event_type),
                escape(&item.action),
                escape(&item.repo),
                escape(&item.time)
            )?;
        }
    }
    writeln!(out, "</div>\n</section>")
}

fn write_contributions(out: &mut String, page: &ProfilePage) -> std::fmt::Result {
    let badge = format!("{} commits", page.contributions.total_commits);
    card_open(out, "Activity Graph", &badge, None)?;
    writeln!(out, "<div id=\"contrib-graph\" class=\"contrib-graph\">")?;
    for week in &page.contributions.weeks {
        write!(out, "<div class=\"contrib-week\">")?;
        for cell in &week.days {
            write!(
                out,
                "<div class=\"contrib-cell level-{}\" data-date=\"{}\" title=\"{}\"></div>",
                cell.level,
                cell.date,
                escape(&cell.title)
            )?;
        }
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>\n</section>")
}

fn write_identity(out: &mut String, p: &ProfileContent) -> std::fmt::Result {
    card_open(out, "On-Chain Identity", "mainnet", None)?;
    writeln!(out, "<div class=\"identity-rows\">")?;
    for row in &p.identity {
        match &row.value {
            IdentityValue::Wallet => writeln!(
                out,
                "<div class=\"identity-row\"><span class=\"id-key\">{}</span>\
                 <span class=\"id-val\" id=\"wallet-addr\" data-address=\"{}\">\
                 <a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></span>\
                 <button class=\"copy-btn\" type=\"button\" data-copy=\"{}\">copy</button></div>",
                escape(row.key),
                escape(&p.wallet_address),
                escape(&p.wallet_url),
                escape(&p.wallet_display),
                escape(&p.wallet_address)
            )?,
            IdentityValue::Text(text) => writeln!(
                out,
                "<div class=\"identity-row\"><span class=\"id-key\">{}</span>\
                 <span class=\"id-val\">{}</span></div>",
                escape(row.key),
                escape(text)
            )?,
        }
    }
    writeln!(out, "</div>\n</section>")
}

fn write_holdings(out: &mut String, page: &ProfilePage) -> std::fmt::Result {
    let (balance, min_balance, assets, apps, created) = match &page.account {
        Section::Populated(a) => (
            format!("{} ALGO", a.balance),
            a.min_balance.clone(),
            a.assets.to_string(),
            a.apps_opted_in.to_string(),
            a.apps_created.to_string(),
        ),
        Section::Fallback => (
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
        ),
    };
    card_open(out, "Algorand Holdings", "live", None)?;
    writeln!(
        out,
        "<div class=\"algo-balance\" id=\"algo-balance\">{}</div>",
        escape(&balance)
    )?;
    writeln!(out, "<div class=\"algo-details\">")?;
    for (label, id, value) in [
        ("Min Balance", "algo-min-balance", &min_balance),
        ("Assets Held", "algo-assets", &assets),
        ("Apps Opted In", "algo-apps", &apps),
        ("Apps Created", "algo-created", &created),
    ] {
        writeln!(
            out,
            "<div class=\"algo-detail\"><span class=\"algo-detail-key\">{label}</span>\
             <span class=\"algo-detail-val\" id=\"{id}\">{}</span></div>",
            escape(value)
        )?;
    }
    writeln!(out, "</div>\n</section>")
}

fn write_transactions(out: &mut String, page: &ProfilePage) -> std::fmt::Result {
    card_open(out, "Recent Transactions", "indexer", None)?;
    writeln!(out, "<div id=\"txn-list\" class=\"txn-list\">")?;
    if let Section::Populated(items) = &page.transactions {
        for txn in items {
            writeln!(
                out,
                "<div class=\"txn-item\"><span class=\"txn-type\">{}</span>\
                 <span class=\"txn-amount {}\">{}</span>\
                 <span class=\"txn-addr\">{}</span>\
                 <span class=\"txn-time\">{}</span>\
                 <a class=\"txn-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">view</a></div>",
                txn.kind.label(),
                txn.kind.amount_class(),
                escape(&txn.amount),
                escape(&txn.peer),
                escape(&txn.time),
                escape(&txn.explorer_url)
            )?;
        }
    }
    writeln!(out, "</div>\n</section>")
}

fn write_tech(out: &mut String, p: &ProfileContent) -> std::fmt::Result {
    card_open(out, "Technologies &amp; Skills", "agent", None)?;
    writeln!(out, "<div class=\"tech-grid\">")?;
    for tag in &p.tech {
        writeln!(
            out,
            "<span class=\"tech-tag\">{} {}</span>",
            tag.icon,
            escape(tag.label)
        )?;
    }
    writeln!(out, "</div>\n</section>")
}

fn write_footer(out: &mut String, p: &ProfileContent) -> std::fmt::Result {
    writeln!(out, "<footer class=\"footer\">")?;
    writeln!(out, "<div class=\"footer-links\">")?;
    for link in &p.footer_links {
        writeln!(out, "<a {}>{}</a>", link_attrs(link), escape(&link.label))?;
    }
    writeln!(out, "</div>")?;
    writeln!(
        out,
        "<p class=\"footer-text\">{} &middot; autonomous agent on Algorand &middot; \
         built by CorvidLabs</p>",
        escape(&p.name)
    )?;
    writeln!(out, "</footer>")
}
