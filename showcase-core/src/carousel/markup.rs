/// HTML for cards and indicator dots
use super::card::Card;

const ARROW_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><line x1="7" y1="17" x2="17" y2="7"></line><polyline points="7 7 17 7 17 17"></polyline></svg>"#;

/// Class of a card element; the layout pass measures the first one
pub const CARD_CLASS: &str = "research-card";

pub const DOT_CLASS: &str = "indicator-dot";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

pub fn card_html(card: &Card, detail_page: &str) -> String {
    let title = escape_html(&card.title);
    format!(
        r#"<div class="{CARD_CLASS}"><div class="research-card-accent accent-yellow"><span>{tag}</span>{ARROW_ICON}</div><div class="research-card-body"><h3 class="research-card-title">{title}</h3><div class="research-card-footer"><span class="research-date">{date}</span><a href="{page}?slug={slug}" class="research-read-more">{action}{ARROW_ICON}</a></div></div><img src="{image}" alt="{title}" class="research-card-bg"></div>"#,
        tag = escape_html(&card.primary_tag),
        date = escape_html(&card.date_label),
        page = escape_html(detail_page),
        slug = escape_html(&card.slug),
        action = card.action.text(),
        image = escape_html(&card.image),
    )
}

pub fn cards_html(cards: &[Card], detail_page: &str) -> String {
    cards.iter().map(|card| card_html(card, detail_page)).collect()
}

/// One dot per slide, the first marked active
pub fn indicators_html(count: usize) -> String {
    (0..count)
        .map(|index| {
            let active = if index == 0 { " active" } else { "" };
            format!(r#"<div class="{DOT_CLASS}{active}" data-index="{index}"></div>"#)
        })
        .collect()
}

/// Track content after a failed load
pub fn placeholder_html(message: &str) -> String {
    format!(r#"<div class="loader">{}</div>"#, escape_html(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::card::ActionLabel;

    fn card() -> Card {
        Card {
            title: "Agents & <Tools>".to_string(),
            slug: "agents-tools".to_string(),
            image: "img/a.png".to_string(),
            primary_tag: "AI".to_string(),
            action: ActionLabel::Watch,
            date_label: "MARCH 5, 2024".to_string(),
        }
    }

    #[test]
    fn test_card_links_to_detail_page() {
        let html = card_html(&card(), "article.html");
        assert!(html.contains(r#"href="article.html?slug=agents-tools""#));
        assert!(html.contains("Watch"));
        assert!(html.contains("MARCH 5, 2024"));
        assert!(html.contains("<span>AI</span>"));
    }

    #[test]
    fn test_card_escapes_post_fields() {
        let html = card_html(&card(), "article.html");
        assert!(html.contains("Agents &amp; &lt;Tools&gt;"));
        assert!(!html.contains("<Tools>"));
    }

    #[test]
    fn test_indicators() {
        let html = indicators_html(3);
        assert_eq!(html.matches(DOT_CLASS).count(), 3);
        assert!(html.starts_with(r#"<div class="indicator-dot active" data-index="0">"#));
        assert!(html.contains(r#"<div class="indicator-dot" data-index="2">"#));
        assert_eq!(indicators_html(0), "");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(
            placeholder_html("Unable to load insights."),
            r#"<div class="loader">Unable to load insights.</div>"#
        );
    }
}
