//! Target word selection
//!
//! Randomness and the daily word lookup are environment-dependent, so they sit
//! behind the `TargetSource` seam. The session itself only ever receives a
//! finished `TargetSelection`.

use super::error::DailyWordError;
use crate::core::{Dictionary, Word};
use log::{info, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::rngs::ThreadRng;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Environment variable read by `EnvDailyWord::default()`
pub const DAILY_WORD_ENV: &str = "WORDLE_DAILY_WORD";

/// How the hidden target of a game is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Random dictionary word
    #[default]
    Random,
    /// Today's word from the daily word provider
    Daily,
    /// Supplied later by the player
    Manual,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Random => "random",
            Self::Daily => "daily",
            Self::Manual => "manual",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "daily" => Ok(Self::Daily),
            "manual" => Ok(Self::Manual),
            other => Err(format!("Unknown game mode: {other} (expected random, daily or manual)")),
        }
    }
}

/// Where a selected target actually came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOrigin {
    Random,
    Daily,
    /// Daily mode was requested but the lookup failed
    DailyFallback,
    Manual,
}

/// Outcome of choosing a target for a new game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSelection {
    pub mode: GameMode,
    /// `None` until a manual target is supplied (or with an empty dictionary)
    pub target: Option<Word>,
    pub origin: TargetOrigin,
    /// User-visible notice, e.g. about a fallback
    pub notice: Option<String>,
}

impl TargetSelection {
    /// Selection with a known target, bypassing any source
    #[must_use]
    pub const fn fixed(target: Word) -> Self {
        Self {
            mode: GameMode::Manual,
            target: Some(target),
            origin: TargetOrigin::Manual,
            notice: None,
        }
    }

    /// Manual mode before the player has entered the word
    #[must_use]
    pub const fn deferred() -> Self {
        Self {
            mode: GameMode::Manual,
            target: None,
            origin: TargetOrigin::Manual,
            notice: None,
        }
    }
}

/// Provider of the daily word
pub trait DailyWordSource {
    /// Make a single attempt to fetch today's word
    ///
    /// # Errors
    /// Returns `DailyWordError` if the word cannot be obtained.
    fn fetch(&self) -> Result<String, DailyWordError>;
}

/// Daily word read from the first non-empty line of a file
#[derive(Debug, Clone)]
pub struct FileDailyWord {
    path: PathBuf,
}

impl FileDailyWord {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DailyWordSource for FileDailyWord {
    fn fetch(&self) -> Result<String, DailyWordError> {
        let content = fs::read_to_string(&self.path)?;
        content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                DailyWordError::Unavailable(format!("{} is empty", self.path.display()))
            })
    }
}

/// Daily word read from an environment variable
#[derive(Debug, Clone)]
pub struct EnvDailyWord {
    var: String,
}

impl EnvDailyWord {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvDailyWord {
    fn default() -> Self {
        Self::new(DAILY_WORD_ENV)
    }
}

impl DailyWordSource for EnvDailyWord {
    fn fetch(&self) -> Result<String, DailyWordError> {
        std::env::var(&self.var)
            .map_err(|e| DailyWordError::Unavailable(format!("{}: {e}", self.var)))
    }
}

/// No provider configured; every fetch fails
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDailyWord;

impl DailyWordSource for NoDailyWord {
    fn fetch(&self) -> Result<String, DailyWordError> {
        Err(DailyWordError::Unavailable(
            "no daily word provider configured".to_string(),
        ))
    }
}

/// Fixed answer, for injection in tests and scripted runs
#[derive(Debug, Clone, Default)]
pub struct FixedDailyWord(pub Option<String>);

impl DailyWordSource for FixedDailyWord {
    fn fetch(&self) -> Result<String, DailyWordError> {
        self.0
            .clone()
            .ok_or_else(|| DailyWordError::Unavailable("no word supplied".to_string()))
    }
}

/// Source of non-deterministic targets
pub trait TargetSource {
    /// Uniformly random dictionary word, `None` for an empty dictionary
    fn random_word(&mut self, dictionary: &Dictionary) -> Option<Word>;

    /// Today's word, raw as the provider returned it
    ///
    /// # Errors
    /// Returns `DailyWordError` if the provider fails.
    fn daily_word(&mut self) -> Result<String, DailyWordError>;
}

/// Random number generator plus a daily word provider
pub struct SystemTargets<R: Rng> {
    rng: R,
    daily: Box<dyn DailyWordSource>,
}

impl SystemTargets<ThreadRng> {
    /// Thread-local RNG with the given daily provider
    #[must_use]
    pub fn new(daily: Box<dyn DailyWordSource>) -> Self {
        Self::with_rng(rand::rng(), daily)
    }
}

impl<R: Rng> SystemTargets<R> {
    pub fn with_rng(rng: R, daily: Box<dyn DailyWordSource>) -> Self {
        Self { rng, daily }
    }
}

impl<R: Rng> TargetSource for SystemTargets<R> {
    fn random_word(&mut self, dictionary: &Dictionary) -> Option<Word> {
        dictionary.words().choose(&mut self.rng).cloned()
    }

    fn daily_word(&mut self) -> Result<String, DailyWordError> {
        self.daily.fetch()
    }
}

/// Choose the target for a new game
///
/// Daily mode makes one attempt; any failure (including a malformed word)
/// falls back to a random word immediately with a notice. A daily word that
/// is missing from the dictionary is still used, with a warning.
pub fn select_target<T: TargetSource + ?Sized>(
    mode: GameMode,
    dictionary: &Dictionary,
    source: &mut T,
) -> TargetSelection {
    match mode {
        GameMode::Random => random_selection(mode, TargetOrigin::Random, dictionary, source, None),
        GameMode::Manual => TargetSelection::deferred(),
        GameMode::Daily => match fetch_daily(source) {
            Ok(word) => {
                let notice = if dictionary.contains(&word) {
                    None
                } else {
                    warn!("Daily word '{word}' is not in the word list, using it anyway");
                    Some("Daily word not in your word list, but using it anyway.".to_string())
                };
                info!("Daily target selected");
                TargetSelection {
                    mode,
                    target: Some(word),
                    origin: TargetOrigin::Daily,
                    notice,
                }
            }
            Err(err) => {
                warn!("Daily word lookup failed ({err}); falling back to a random word");
                let notice =
                    format!("Could not fetch today's word ({err}). Using a random word instead.");
                random_selection(
                    mode,
                    TargetOrigin::DailyFallback,
                    dictionary,
                    source,
                    Some(notice),
                )
            }
        },
    }
}

fn fetch_daily<T: TargetSource + ?Sized>(source: &mut T) -> Result<Word, DailyWordError> {
    let raw = source.daily_word()?;
    let normalized = raw.trim().to_lowercase();
    Word::new(&normalized).map_err(|_| DailyWordError::Malformed(normalized))
}

fn random_selection<T: TargetSource + ?Sized>(
    mode: GameMode,
    origin: TargetOrigin,
    dictionary: &Dictionary,
    source: &mut T,
    notice: Option<String>,
) -> TargetSelection {
    let target = source.random_word(dictionary);
    let notice = if target.is_none() {
        Some("The word list is empty; no target could be chosen.".to_string())
    } else {
        notice
    };

    TargetSelection {
        mode,
        target,
        origin,
        notice,
    }
}
