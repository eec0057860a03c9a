use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use itertools::Itertools;
use rand::seq::SliceRandom;

static SAMPLE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/resources/samples");

/// Practice texts bundled with the binary
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum SampleName {
    BinaryTree,
    LinkedList,
    FizzBuzz,
}

impl SampleName {
    pub fn file_name(&self) -> &'static str {
        match self {
            SampleName::BinaryTree => "binary_tree.ts",
            SampleName::LinkedList => "linked_list.rs",
            SampleName::FizzBuzz => "fizz_buzz.py",
        }
    }

    pub fn random() -> Self {
        *SampleName::value_variants()
            .choose(&mut rand::thread_rng())
            .unwrap_or(&SampleName::BinaryTree)
    }

    /// Comma separated names as accepted on the command line
    pub fn list() -> String {
        SampleName::value_variants()
            .iter()
            .filter_map(|s| s.to_possible_value())
            .map(|v| v.get_name().to_string())
            .join(", ")
    }
}

/// A named practice text
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub title: String,
    pub text: String,
}

impl Sample {
    pub fn bundled(name: SampleName, tab_width: usize) -> Result<Self> {
        let file = SAMPLE_DIR
            .get_file(name.file_name())
            .ok_or_else(|| anyhow!("bundled sample {} not found", name.file_name()))?;
        let text = file
            .contents_utf8()
            .with_context(|| format!("bundled sample {} is not utf-8", name.file_name()))?;

        Ok(Self {
            title: name.file_name().to_string(),
            text: normalize(text, tab_width),
        })
    }

    pub fn from_file(path: &Path, tab_width: usize) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            title,
            text: normalize(&text, tab_width),
        })
    }

    pub fn custom(text: &str, tab_width: usize) -> Self {
        Self {
            title: "custom prompt".to_string(),
            text: normalize(text, tab_width),
        }
    }
}

/// Make a text typeable from the keyboard: unix line endings (old mac `\r`
/// included), tabs expanded to what the Tab key inserts, other control
/// characters dropped, no trailing whitespace at the very end.
pub fn normalize(text: &str, tab_width: usize) -> String {
    let tab = " ".repeat(tab_width);
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', &tab)
        .chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect::<String>()
        .trim_end()
        .to_string()
}
