// Rule-based English lemmatizer.
//
// An irregular-form table is consulted first; anything not in it goes
// through a small set of suffix rules for plural nouns and inflected verbs.
// The rules are deterministic and dictionary-free, so they trade some
// accuracy for a fixed, versioned behavior. The irregular table can be
// extended at runtime from a tab-separated file.

use std::collections::HashMap;

use anyhow::{bail, Result};

/// Bump whenever IRREGULAR or the suffix rules change output.
pub const LEMMA_TABLE_VERSION: &str = "1";

/// Irregular and rule-resistant forms. Entries that map a word to itself
/// shield it from the suffix rules.
const IRREGULAR: &[(&str, &str)] = &[
    // be / have / do / go
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("doing", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("going", "go"),
    // strong verbs
    ("began", "begin"),
    ("begun", "begin"),
    ("became", "become"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("built", "build"),
    ("came", "come"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("felt", "feel"),
    ("found", "find"),
    ("gave", "give"),
    ("given", "give"),
    ("got", "get"),
    ("gotten", "get"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("held", "hold"),
    ("kept", "keep"),
    ("knew", "know"),
    ("known", "know"),
    ("led", "lead"),
    ("left", "leave"),
    ("lost", "lose"),
    ("made", "make"),
    ("making", "make"),
    ("meant", "mean"),
    ("met", "meet"),
    ("oversaw", "oversee"),
    ("overseen", "oversee"),
    ("paid", "pay"),
    ("ran", "run"),
    ("said", "say"),
    ("saw", "see"),
    ("seen", "see"),
    ("sent", "send"),
    ("sold", "sell"),
    ("spent", "spend"),
    ("stood", "stand"),
    ("taught", "teach"),
    ("taken", "take"),
    ("taking", "take"),
    ("thought", "think"),
    ("told", "tell"),
    ("took", "take"),
    ("understood", "understand"),
    ("won", "win"),
    ("wrote", "write"),
    ("written", "write"),
    // regular verbs the suffix rules get wrong
    ("used", "use"),
    ("uses", "use"),
    ("using", "use"),
    ("caused", "cause"),
    ("causes", "cause"),
    ("causing", "cause"),
    ("created", "create"),
    ("creating", "create"),
    ("changed", "change"),
    ("changing", "change"),
    ("arranged", "arrange"),
    ("arranging", "arrange"),
    ("challenged", "challenge"),
    ("challenging", "challenge"),
    ("exchanged", "exchange"),
    ("exchanging", "exchange"),
    ("completed", "complete"),
    ("completing", "complete"),
    ("deleted", "delete"),
    ("deleting", "delete"),
    ("promoted", "promote"),
    ("promoting", "promote"),
    ("synced", "sync"),
    ("syncing", "sync"),
    // irregular plurals
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("criteria", "criterion"),
    ("analyses", "analysis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    // look inflected, are not
    ("always", "always"),
    ("perhaps", "perhaps"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("physics", "physics"),
    ("mathematics", "mathematics"),
    ("economics", "economics"),
    ("politics", "politics"),
    ("ethics", "ethics"),
    ("hundred", "hundred"),
    ("morning", "morning"),
    ("evening", "evening"),
    ("wedding", "wedding"),
    ("ceiling", "ceiling"),
    ("sibling", "sibling"),
    ("interesting", "interesting"),
];

/// Stem endings (after stripping -ed / -ing) that take back a silent e.
const RESTORE_E: &[&str] = &[
    "at", "bl", "iz", "yz", "ys", "ag", "ur", "ir", "ut", "ud", "as", "rs", "ns", "v", "c",
];

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: HashMap<String, String>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        let exceptions = IRREGULAR
            .iter()
            .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
            .collect();
        Self { exceptions }
    }
}

impl Lemmatizer {
    /// Add or replace a single irregular form.
    pub fn insert(&mut self, form: &str, lemma: &str) {
        self.exceptions
            .insert(form.to_lowercase(), lemma.to_lowercase());
    }

    /// Merge `form<TAB>lemma` lines into the irregular table.
    ///
    /// Blank lines and lines starting with `#` are skipped. Returns the
    /// number of entries added or replaced.
    pub fn extend_from_tsv(&mut self, contents: &str) -> Result<usize> {
        let mut added = 0;
        for (i, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t').map(str::trim);
            match (fields.next(), fields.next(), fields.next()) {
                (Some(form), Some(lemma), None) if !form.is_empty() && !lemma.is_empty() => {
                    self.insert(form, lemma);
                    added += 1;
                }
                _ => bail!(
                    "line {}: expected `form<TAB>lemma`, got {:?}",
                    i + 1,
                    line
                ),
            }
        }
        Ok(added)
    }

    /// Lemmatize a lowercase word.
    ///
    /// Non-ASCII words and words of three letters or fewer pass through
    /// unchanged unless the irregular table names them.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return lemma.clone();
        }
        if !word.is_ascii() || word.len() <= 3 {
            return word.to_string();
        }

        if word.ends_with('s') {
            return strip_plural(word);
        }
        if let Some(stem) = word.strip_suffix("ied") {
            if stem.len() >= 2 {
                return format!("{stem}y");
            }
        }
        if word.ends_with("eed") {
            return word.to_string();
        }
        for suffix in ["ing", "ed"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.len() >= 3 && has_vowel(stem) {
                    return restore_stem(stem);
                }
                return word.to_string();
            }
        }

        word.to_string()
    }
}

fn strip_plural(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "ches", "shes", "xes", "zzes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if ["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return word.to_string();
    }
    word[..word.len() - 1].to_string()
}

/// Repair a stem left behind by stripping -ed or -ing.
fn restore_stem(stem: &str) -> String {
    let b = stem.as_bytes();
    let n = b.len();

    // runn -> run, planned -> plan; but sell, pass, buzz keep the pair
    if b[n - 1] == b[n - 2] && is_consonant(b, n - 1) && !matches!(b[n - 1], b'l' | b's' | b'z') {
        return stem[..n - 1].to_string();
    }

    if let Some(ending) = RESTORE_E.iter().find(|e| stem.ends_with(**e)) {
        if takes_silent_e(b, ending.len()) {
            return format!("{stem}e");
        }
    }

    // Short cvc stems: cod -> code, writ -> write
    if measure(b) == 1 && ends_cvc(b) {
        return format!("{stem}e");
    }

    stem.to_string()
}

/// Guards for the RESTORE_E endings that collide with common base forms
/// (repair, shout, avoid, treat).
fn takes_silent_e(b: &[u8], ending_len: usize) -> bool {
    let n = b.len();
    let ending = &b[n - ending_len..];
    let before = if n > ending_len { Some(b[n - ending_len - 1]) } else { None };

    match ending {
        b"at" => !matches!(before, Some(b'e') | Some(b'o')),
        b"ir" => !matches!(before, Some(b'a') | Some(b'e') | Some(b'o')),
        b"ut" | b"ud" => n > ending_len && is_consonant(b, n - ending_len - 1),
        _ => true,
    }
}

fn has_vowel(s: &str) -> bool {
    s.bytes().any(|c| matches!(c, b'a' | b'e' | b'i' | b'o' | b'u' | b'y'))
}

/// Consonant test in the Porter sense: `y` after a consonant is a vowel.
fn is_consonant(b: &[u8], i: usize) -> bool {
    match b[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(b, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences in the word.
fn measure(b: &[u8]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..b.len() {
        let vowel = !is_consonant(b, i);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
    }
    m
}

/// Consonant-vowel-consonant ending where the last consonant is not w, x or y.
fn ends_cvc(b: &[u8]) -> bool {
    let n = b.len();
    n >= 3
        && is_consonant(b, n - 3)
        && !is_consonant(b, n - 2)
        && is_consonant(b, n - 1)
        && !matches!(b[n - 1], b'w' | b'x' | b'y')
}
