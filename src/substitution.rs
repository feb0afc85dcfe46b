/*!
 * Slot substitution engine.
 *
 * A slot is an empty target element in a template document, recognized by a
 * fixed pair of delimiters with nothing between them. Translated lines are
 * written into the slots one by one, in document order.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubstitutionError;

/// Text that ends the opening of an XLIFF target element
pub const DEFAULT_PRECEDING: &str = r#"xml:space="preserve">"#;

/// Text that closes an XLIFF target element and its trans-unit
pub const DEFAULT_FOLLOWING: &str = "</target></trans-unit>";

static DEFAULT_SLOT_PATTERN: Lazy<SlotPattern> = Lazy::new(|| {
    SlotPattern::new(DEFAULT_PRECEDING, DEFAULT_FOLLOWING).expect("Invalid default slot pattern")
});

/// Delimiter pair that identifies an empty slot
#[derive(Debug, Clone)]
pub struct SlotPattern {
    preceding: String,
    following: String,
    matcher: Regex,
}

/// Result of filling the slots of one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The template with the filled slots
    pub output: String,
    /// Number of slots that received a line
    pub slots_filled: usize,
    /// Number of lines left over once the slots ran out
    pub unused_lines: usize,
    /// Number of slots still empty in the output
    pub remaining_slots: usize,
}

impl SlotPattern {
    /// Build a pattern from two literal delimiters.
    ///
    /// Both must be non-empty: with a single delimiter a filled target would
    /// still match, and be counted and filled as if it were empty.
    pub fn new(preceding: &str, following: &str) -> Result<Self, SubstitutionError> {
        if preceding.is_empty() || following.is_empty() {
            return Err(SubstitutionError::EmptyMarker);
        }

        let matcher = Regex::new(&format!(
            "{}{}",
            regex::escape(preceding),
            regex::escape(following)
        ))?;

        Ok(Self {
            preceding: preceding.to_string(),
            following: following.to_string(),
            matcher,
        })
    }

    pub fn preceding(&self) -> &str {
        &self.preceding
    }

    pub fn following(&self) -> &str {
        &self.following
    }

    /// Count the empty slots in a document
    pub fn count_slots(&self, text: &str) -> usize {
        self.matcher.find_iter(text).count()
    }

    /// Write each line into the next empty slot.
    ///
    /// Lines are inserted verbatim, terminators included. The cursor only
    /// moves forward, so inserted text is never searched for markers.
    pub fn fill_slots<S: AsRef<str>>(&self, template: &str, lines: &[S]) -> Substitution {
        let inserted: usize = lines.iter().map(|line| line.as_ref().len()).sum();
        let mut output = String::with_capacity(template.len() + inserted);
        let mut cursor = 0;
        let mut slots_filled = 0;

        for line in lines {
            let Some(slot) = self.matcher.find_at(template, cursor) else {
                break;
            };

            let content_at = slot.start() + self.preceding.len();
            output.push_str(&template[cursor..content_at]);
            output.push_str(line.as_ref());
            output.push_str(&template[content_at..slot.end()]);

            cursor = slot.end();
            slots_filled += 1;
        }

        let remaining_slots = self.count_slots(&template[cursor..]);
        output.push_str(&template[cursor..]);

        Substitution {
            output,
            slots_filled,
            unused_lines: lines.len() - slots_filled,
            remaining_slots,
        }
    }
}

impl Default for SlotPattern {
    fn default() -> Self {
        DEFAULT_SLOT_PATTERN.clone()
    }
}

/// Fill the XLIFF target slots of `template` with `translated_lines`
pub fn build_output<S: AsRef<str>>(template: &str, translated_lines: &[S]) -> String {
    DEFAULT_SLOT_PATTERN.fill_slots(template, translated_lines).output
}

/// Split text into lines that keep their terminators.
///
/// The last line may have no terminator. Empty text yields no lines.
pub fn split_translated_lines(text: &str, normalize_line_endings: bool) -> Vec<String> {
    if normalize_line_endings {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        normalized.split_inclusive('\n').map(str::to_string).collect()
    } else {
        text.split_inclusive('\n').map(str::to_string).collect()
    }
}
