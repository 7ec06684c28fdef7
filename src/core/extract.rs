//! Tolerant field lookup over storcli text.
//!
//! Every lookup is case-insensitive and returns `None` when nothing matches.
//! Labels are always escaped before they become part of a pattern, so a
//! label or drive id containing `.`, `:` or `/` is matched literally.

use once_cell::sync::Lazy;
use regex::Regex;

/// Phrases storcli prints when a command is not understood by the firmware
const REJECTION_PHRASES: &[&str] = &["unsupported command", "un-supported command", "invalid command"];

static DRIVE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*Drive[ \t]+(?:/c\d+/e(\d+)/s(\d+)|(\d+):(\d+))\b")
        .expect("drive header pattern is valid")
});

static NUMBERED_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\d+").expect("numbered row pattern is valid"));

static ANY_PERCENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*%").expect("percent pattern is valid"));

/// True when the block is a dialect rejection rather than real output
pub fn is_unsupported(text: &str) -> bool {
    let lower = text.to_lowercase();
    REJECTION_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// Present, non-blank and not a rejection
pub fn usable(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty() && !is_unsupported(t))
}

fn label_alternation(labels: &[&str]) -> String {
    labels
        .iter()
        .map(|label| regex::escape(label).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("Skipping lookup, bad pattern {:?}: {}", pattern, e);
            None
        }
    }
}

/// First value of `<label> : value` or `<label> = value` for any synonym
pub fn field<'a>(text: &'a str, labels: &[&str]) -> Option<&'a str> {
    field_where(text, labels, |_| true)
}

/// Like [`field`], skipping values the predicate rejects
pub fn field_where<'a, P>(text: &'a str, labels: &[&str], accept: P) -> Option<&'a str>
where
    P: Fn(&str) -> bool,
{
    let re = compile(&format!(
        r"(?i)\b(?:{})\s*[:=]\s*(\S+)",
        label_alternation(labels)
    ))?;

    let found = re
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .find(|value| accept(value));
    found
}

/// Value of a `<label> : value` pair that follows `anchor` on the same line,
/// e.g. `CacheVault ... State : Optimal` inside a controller summary.
pub fn field_after<'a>(text: &'a str, anchor: &[&str], labels: &[&str]) -> Option<&'a str> {
    let re = compile(&format!(
        r"(?i)(?:{}).*?\b(?:{})\s*[:=]\s*(\S+)",
        label_alternation(anchor),
        label_alternation(labels)
    ))?;

    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// First integer on the same line as the first occurrence of any label
pub fn number_after(text: &str, labels: &[&str]) -> Option<u64> {
    numbers_after(text, labels).into_iter().next()
}

/// First integer on each line mentioning one of the labels
pub fn numbers_after(text: &str, labels: &[&str]) -> Vec<u64> {
    let Some(re) = compile(&format!(r"(?i)(?:{}).*?(\d+)", label_alternation(labels))) else {
        return Vec::new();
    };

    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Percentage following a label on the same line (`Progress ... 45%`)
pub fn percent_after(text: &str, labels: &[&str]) -> Option<u32> {
    let re = compile(&format!(r"(?i)(?:{}).*?(\d+)\s*%", label_alternation(labels)))?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// First percentage anywhere in the text
pub fn any_percent(text: &str) -> Option<u32> {
    ANY_PERCENT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// True if the text mentions any of the phrases (case-insensitive)
pub fn mentions(text: &str, phrases: &[&str]) -> bool {
    let lower = text.to_lowercase();
    phrases.iter().any(|p| lower.contains(&p.to_lowercase()))
}

/// True if `word` appears as a whole word (case-insensitive)
pub fn has_word(text: &str, word: &str) -> bool {
    compile(&format!(r"(?i)\b{}\b", regex::escape(word)))
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

/// Number of table rows, i.e. lines starting with a digit
pub fn numbered_rows(text: &str) -> usize {
    NUMBERED_ROW.find_iter(text).count()
}

/// Case-insensitive prefix match of a status token against known words
pub fn token_is(token: &str, words: &[&str]) -> bool {
    let lower = token.to_lowercase();
    words.iter().any(|w| lower.starts_with(&w.to_lowercase()))
}

/// One drive's block inside `show all` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveSection<'a> {
    /// `enclosure:slot`
    pub id: String,
    pub text: &'a str,
}

/// Split detail output into per-drive sections.
///
/// A section starts at a `Drive 252:0` or `Drive /c0/e252/s0` header and
/// runs until the next header naming a different drive, so the several
/// sub-headers storcli prints for one drive stay in one section. Ids are
/// compared as parsed numbers, never as patterns, so `252:1` can not swallow
/// the block of `252:10`.
pub fn drive_sections(text: &str) -> Vec<DriveSection<'_>> {
    let headers: Vec<(usize, String)> = DRIVE_HEADER
        .captures_iter(text)
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            let enclosure = caps.get(1).or_else(|| caps.get(3))?.as_str();
            let slot = caps.get(2).or_else(|| caps.get(4))?.as_str();
            Some((start, format!("{}:{}", enclosure, slot)))
        })
        .collect();

    let mut sections: Vec<DriveSection<'_>> = Vec::new();
    let mut i = 0;

    while i < headers.len() {
        let start = headers[i].0;
        let id = &headers[i].1;
        let mut j = i + 1;
        while j < headers.len() && headers[j].1 == *id {
            j += 1;
        }
        let end = headers.get(j).map(|(pos, _)| *pos).unwrap_or(text.len());

        // first block wins if a drive shows up twice
        if !sections.iter().any(|s| s.id == *id) {
            sections.push(DriveSection {
                id: id.clone(),
                text: &text[start..end],
            });
        }
        i = j;
    }

    sections
}

/// The section belonging to drive `id` (`enclosure:slot`), if any
pub fn drive_section<'a>(text: &'a str, id: &str) -> Option<&'a str> {
    drive_sections(text)
        .into_iter()
        .find(|section| section.id == id)
        .map(|section| section.text)
}
