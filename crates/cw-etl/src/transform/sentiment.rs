/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Lexicon-based sentiment scoring.
//!
//! Each token is looked up in a valence lexicon (roughly -4 to +4). A valence
//! is adjusted by the tokens around it:
//!
//! - a negator within the three preceding tokens flips and damps it,
//! - a booster or dampener immediately before it pushes it away from or
//!   towards zero,
//! - an ALL-CAPS token in otherwise mixed-case text is emphasised,
//! - tokens before a "but" count half, tokens after it count one and a half.
//!
//! The adjusted valences are summed, exclamation marks add emphasis, and the
//! sum is squashed into [-1, 1] with `x / sqrt(x^2 + 15)`.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDateTime;
use cw_database::models::NewSentimentDim;

/// Normalisation constant of the compound score
const ALPHA: f64 = 15.0;
/// Multiplier applied to a negated valence
const NEGATION_SCALAR: f64 = -0.74;
/// Shift contributed by a booster or dampener
const BOOST: f64 = 0.293;
/// Shift contributed by an emphasised (ALL-CAPS) token
const CAPS_BOOST: f64 = 0.733;
/// Shift per exclamation mark, capped at four marks
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// How far back a negator still applies
const NEGATION_WINDOW: usize = 3;

/// Score at or above which a text is positive
pub const POSITIVE_THRESHOLD: f64 = 0.5;
/// Score at or below which a text is negative
pub const NEGATIVE_THRESHOLD: f64 = -0.5;

const LEXICON: &[(&str, f64)] = &[
  // general
  ("good", 1.9),
  ("great", 3.1),
  ("excellent", 2.7),
  ("amazing", 2.8),
  ("awesome", 3.1),
  ("love", 3.2),
  ("like", 1.5),
  ("best", 3.2),
  ("better", 1.9),
  ("happy", 2.7),
  ("win", 2.8),
  ("winning", 2.4),
  ("strong", 2.3),
  ("success", 2.7),
  ("successful", 2.8),
  ("positive", 2.6),
  ("optimistic", 2.2),
  ("confident", 2.2),
  ("hope", 1.9),
  ("exciting", 2.2),
  ("safe", 1.9),
  ("bad", -2.5),
  ("worse", -2.1),
  ("worst", -3.1),
  ("terrible", -2.1),
  ("awful", -2.0),
  ("horrible", -2.5),
  ("hate", -2.7),
  ("fear", -2.2),
  ("afraid", -2.0),
  ("panic", -2.3),
  ("worried", -1.2),
  ("weak", -1.9),
  ("loss", -1.3),
  ("losses", -1.7),
  ("lose", -1.7),
  ("losing", -1.6),
  ("fail", -2.5),
  ("failed", -2.3),
  ("failure", -2.3),
  ("negative", -2.7),
  ("risk", -1.1),
  ("risky", -1.4),
  ("problem", -1.7),
  ("crisis", -3.1),
  ("uncertain", -1.2),
  ("concern", -1.0),
  ("warning", -1.4),
  // market
  ("bullish", 2.6),
  ("bull", 1.8),
  ("rally", 2.0),
  ("surge", 2.0),
  ("soar", 2.3),
  ("soaring", 2.4),
  ("gain", 2.4),
  ("gains", 2.2),
  ("profit", 1.9),
  ("profits", 1.9),
  ("growth", 1.6),
  ("rise", 1.2),
  ("rising", 1.2),
  ("record", 1.2),
  ("breakthrough", 2.2),
  ("adoption", 1.4),
  ("upgrade", 1.6),
  ("moon", 2.0),
  ("outperform", 1.8),
  ("recovery", 1.7),
  ("bearish", -2.6),
  ("bear", -1.6),
  ("crash", -2.6),
  ("crashed", -2.6),
  ("plunge", -2.4),
  ("plunged", -2.4),
  ("dump", -1.9),
  ("drop", -1.1),
  ("dropped", -1.2),
  ("fall", -1.1),
  ("falling", -1.3),
  ("decline", -1.4),
  ("selloff", -1.8),
  ("scam", -2.8),
  ("fraud", -3.0),
  ("hack", -2.1),
  ("hacked", -2.4),
  ("exploit", -2.0),
  ("bankrupt", -3.0),
  ("bankruptcy", -3.0),
  ("volatile", -0.6),
  ("underperform", -1.8),
  ("rekt", -2.4),
];

const NEGATORS: &[&str] = &[
  "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "without", "cannot",
  "cant", "can't", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't", "isnt", "isn't",
  "wasnt", "wasn't", "arent", "aren't", "wont", "won't", "shouldnt", "shouldn't", "aint",
  "ain't",
];

const BOOSTERS: &[&str] = &[
  "very",
  "extremely",
  "incredibly",
  "really",
  "so",
  "totally",
  "absolutely",
  "hugely",
  "massively",
  "highly",
  "most",
  "more",
  "super",
];

const DAMPENERS: &[&str] = &["slightly", "somewhat", "barely", "hardly", "kinda", "marginally", "little"];

/// Three-way classification of a compound score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
  Positive,
  Neutral,
  Negative,
}

impl SentimentLabel {
  /// Total over every finite score: `>= 0.5` positive, `<= -0.5` negative,
  /// everything in between neutral
  pub fn from_score(score: f64) -> Self {
    if score >= POSITIVE_THRESHOLD {
      SentimentLabel::Positive
    } else if score <= NEGATIVE_THRESHOLD {
      SentimentLabel::Negative
    } else {
      SentimentLabel::Neutral
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      SentimentLabel::Positive => "positive",
      SentimentLabel::Neutral => "neutral",
      SentimentLabel::Negative => "negative",
    }
  }
}

impl fmt::Display for SentimentLabel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Stateless scorer over a fixed lexicon
pub struct SentimentAnalyzer {
  lexicon: HashMap<&'static str, f64>,
}

impl Default for SentimentAnalyzer {
  fn default() -> Self {
    Self::new()
  }
}

impl SentimentAnalyzer {
  pub fn new() -> Self {
    Self { lexicon: LEXICON.iter().copied().collect() }
  }

  /// Compound polarity of `text` in [-1, 1]; 0 for text with no known words
  pub fn compound(&self, text: &str) -> f64 {
    let raw: Vec<&str> = text.split_whitespace().collect();
    let tokens: Vec<String> = raw.iter().map(|w| normalise(w)).collect();
    let mixed_case = text.chars().any(|c| c.is_lowercase());
    let but_at = tokens.iter().position(|t| t == "but");

    let mut sum = 0.0;
    for (i, token) in tokens.iter().enumerate() {
      let Some(&base) = self.lexicon.get(token.as_str()) else {
        continue;
      };
      let mut valence = base;

      if mixed_case && is_shouted(raw[i]) {
        valence += CAPS_BOOST * valence.signum();
      }

      if i > 0 {
        let prev = tokens[i - 1].as_str();
        if BOOSTERS.contains(&prev) {
          valence += BOOST * valence.signum();
        } else if DAMPENERS.contains(&prev) {
          valence -= BOOST * valence.signum();
        }
      }

      let window = i.saturating_sub(NEGATION_WINDOW)..i;
      if tokens[window].iter().any(|t| NEGATORS.contains(&t.as_str())) {
        valence *= NEGATION_SCALAR;
      }

      if let Some(b) = but_at {
        if i < b {
          valence *= 0.5;
        } else if i > b {
          valence *= 1.5;
        }
      }

      sum += valence;
    }

    if sum != 0.0 {
      let marks = text.chars().filter(|&c| c == '!').count().min(MAX_EXCLAMATIONS);
      sum += marks as f64 * EXCLAMATION_BOOST * sum.signum();
    }

    normalise_score(sum)
  }

  /// Score one timestamped text into a `sentiment_dim` row
  pub fn score(&self, ts: NaiveDateTime, text: &str) -> NewSentimentDim {
    let score = self.compound(text);
    NewSentimentDim { ts, score, sentiment: SentimentLabel::from_score(score).to_string() }
  }
}

fn normalise(word: &str) -> String {
  word
    .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
    .trim_matches('\'')
    .to_lowercase()
}

fn is_shouted(word: &str) -> bool {
  let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
  letters.len() > 1 && letters.iter().all(|c| c.is_uppercase())
}

fn normalise_score(sum: f64) -> f64 {
  (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}
