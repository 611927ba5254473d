//! Follower-count extraction from OCR text.
//!
//! Screenshots of statistics pages show audience sizes as `145K`, `1,2M` or
//! plain `50000`. [`extract_number`] collects every candidate matching one of
//! three patterns and returns the largest one.

use std::sync::OnceLock;

use regex::Regex;

/// How a candidate number is scaled by its `K` / `M` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalingMode {
    /// Scale every candidate by whichever unit letter appears anywhere in the
    /// text (`M`/`m` first, then `K`/`k`).
    ///
    /// Text mixing units, or containing an `m` in an ordinary word, scales
    /// every candidate the same way.
    #[default]
    Global,
    /// Scale each candidate by the suffix its own pattern matched.
    PerMatch,
}

impl ScalingMode {
    /// Parse the CLI spelling (`global` / `per-match`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "global" => Some(ScalingMode::Global),
            "per-match" => Some(ScalingMode::PerMatch),
            _ => None,
        }
    }
}

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

struct Patterns {
    millions: Regex,
    thousands: Regex,
    plain: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        millions: Regex::new(r"([0-9]+[.,]?[0-9]*)\s*[Mm]").expect("regex is valid"),
        thousands: Regex::new(r"([0-9]+[.,]?[0-9]*)\s*[Kk]").expect("regex is valid"),
        plain: Regex::new(r"([0-9]{3,})").expect("regex is valid"),
    })
}

/// Extract the largest follower count from `text` using global unit scaling.
///
/// # Examples
///
/// ```
/// use stats_core::extract::extract_number;
///
/// assert_eq!(extract_number("145K"), Some(145_000));
/// assert_eq!(extract_number("1.2M"), Some(1_200_000));
/// assert_eq!(extract_number("48213"), Some(48_213));
/// assert_eq!(extract_number("aucun chiffre"), None);
/// ```
pub fn extract_number(text: &str) -> Option<u64> {
    extract_number_with(text, ScalingMode::Global)
}

/// Extract the largest follower count from `text` with an explicit scaling
/// mode. Returns `None` when no pattern matches.
pub fn extract_number_with(text: &str, mode: ScalingMode) -> Option<u64> {
    let p = patterns();
    let global_factor = global_factor(text);

    let sources = [
        (&p.millions, MILLION),
        (&p.thousands, THOUSAND),
        (&p.plain, 1.0),
    ];

    let mut best: Option<f64> = None;
    for (regex, suffix_factor) in sources {
        let factor = match mode {
            ScalingMode::Global => global_factor,
            ScalingMode::PerMatch => suffix_factor,
        };
        for caps in regex.captures_iter(text) {
            let Some(value) = caps.get(1).and_then(|m| parse_decimal(m.as_str())) else {
                continue;
            };
            let scaled = value * factor;
            // Out of `u64` range: OCR noise, not a count.
            if !scaled.is_finite() || scaled > u64::MAX as f64 {
                continue;
            }
            best = Some(best.map_or(scaled, |b| b.max(scaled)));
        }
    }

    best.map(|v| v.round() as u64)
}

/// Unit factor implied by the whole text.
fn global_factor(text: &str) -> f64 {
    if text.contains(['M', 'm']) {
        MILLION
    } else if text.contains(['K', 'k']) {
        THOUSAND
    } else {
        1.0
    }
}

/// Parse a captured number, accepting `,` as the decimal separator.
fn parse_decimal(raw: &str) -> Option<f64> {
    let normalised: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalised.parse::<f64>().ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
