//! Terminal presentation of suggestions

use crate::types::{DomainSuggestion, LanguageInfo, SuggestionStatus};

/// Which flow produced a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Exact domain lookup
    Search,
    /// AI generation from a description
    Ai,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Search => write!(f, "Domain search"),
            SearchMode::Ai => write!(f, "AI domain generator"),
        }
    }
}

/// Format an amount with its currency symbol, e.g. `$9.99`
pub fn format_price(price: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, price)
}

/// Status pill text
pub fn status_label(status: SuggestionStatus) -> &'static str {
    match status {
        SuggestionStatus::Free => "Available",
        SuggestionStatus::Premium => "Premium",
        SuggestionStatus::Taken | SuggestionStatus::Unavailable => "Unavailable",
        SuggestionStatus::Unknown => "Unknown",
    }
}

/// `SAVE 80%` badge, only for purchasable domains with a discount
pub fn save_badge(suggestion: &DomainSuggestion) -> Option<String> {
    if !suggestion.status.is_purchasable() {
        return None;
    }
    suggestion
        .save_percentage
        .filter(|p| *p > 0.0)
        .map(|p| format!("SAVE {:.0}%", p))
}

/// Premium domains and a few well-regarded TLDs get a star
pub fn is_highlighted(suggestion: &DomainSuggestion) -> bool {
    suggestion.is_premium
        || suggestion.domain_name.contains(".info")
        || suggestion.domain_name.contains(".org")
}

/// Human-readable name for a language code; unknown codes are upper-cased
pub fn language_name(code: &str) -> String {
    let name = match code {
        "en" => "English",
        "es" => "Spanish",
        "nl" => "Dutch",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "ru" => "Russian",
        "sv" => "Swedish",
        "da" => "Danish",
        "no" => "Norwegian",
        "fi" => "Finnish",
        "cs" => "Czech",
        "pl" => "Polish",
        "tr" => "Turkish",
        "zh" => "Chinese",
        "ja" => "Japanese",
        "ko" => "Korean",
        "ar" => "Arabic",
        other => return other.to_uppercase(),
    };
    name.to_string()
}

pub fn language_badge(info: &LanguageInfo) -> String {
    format!(
        "🌐 Detected: {} (.{} domains prioritized)",
        language_name(&info.detected_language),
        info.primary_tld
    )
}

/// Message shown when a flow produced nothing
pub fn no_results_message(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::Ai => "No domains found or all suggestions are unavailable. Try a different query.",
        SearchMode::Search => "Domain not found or unavailable. Try a different domain name.",
    }
}

/// Render one suggestion as a multi-line card
pub fn render_card(suggestion: &DomainSuggestion) -> String {
    let star = if is_highlighted(suggestion) { "★" } else { " " };
    let mut card = format!(
        "{} {}  [{}]\n",
        star,
        suggestion.domain_name,
        status_label(suggestion.status)
    );

    if suggestion.status.is_purchasable() {
        let mut line = String::from("  ");
        if let Some(badge) = save_badge(suggestion) {
            line.push_str(&badge);
            line.push_str("  ");
        }
        if let Some(original) = suggestion.original_price {
            line.push_str(&format!("was {}  ", format_price(original, &suggestion.currency)));
        }
        line.push_str(&format!(
            "{}/1st yr  → Buy now",
            format_price(suggestion.discounted_price, &suggestion.currency)
        ));
        card.push_str(&line);
    } else {
        card.push_str("  This domain is not available for registration.");
    }

    card
}
