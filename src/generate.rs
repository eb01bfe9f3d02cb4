// SPDX-License-Identifier: MIT

//! The `generate` module defines the gitignore generation pass: it walks a [`Config`], fetches
//! each entry's template & writes the concatenated gitignore file.

use std::error::Error as StdErr;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::network::TemplateHost;
use crate::spec::{Config, Source};

/// Generates a gitignore file at `output_filename` from the input config.
///
/// Each source specified in the config is given its own section in the output file; custom
/// ignore patterns are appended at the end of the file in their own section. Fetch failures
/// degrade to skipped entries & never abort generation, only I/O failures propagate.
pub fn inflate(
    config: &Config,
    output_filename: &str,
    host: &dyn TemplateHost,
) -> Result<(), Box<dyn StdErr>> {
    let mut generated = format!(
        "#### Auto-generated .gitignore by ignoreit tool (schema version: {}) ####\n",
        config.schema_version
    );

    for source in &config.sources {
        generated.push_str(&inflate_source(source, host));
    }

    if !config.custom.is_empty() {
        generated.push_str("\n### Custom Patterns ###\n\n");
        for pattern in &config.custom {
            generated.push_str(pattern);
            generated.push('\n');
        }
    }

    write_to_file(output_filename, &generated)
}

/// Renders one source's section: a source header, then a header & verbatim contents per entry.
///
/// Sources without entries & entries whose fetch yields nothing contribute no text at all.
fn inflate_source(source: &Source, host: &dyn TemplateHost) -> String {
    let mut section = String::new();

    if source.entries.is_empty() {
        return section;
    }

    section.push_str(&format!(
        "\n### Source: {} - {} ###\n",
        source.repo, source.branch
    ));
    for entry in &source.entries {
        let contents = host.contents(&source.download_link(entry));
        if contents.is_empty() {
            continue;
        }

        section.push_str(&format!("\n## Entry: {} ##\n", entry));
        section.push_str(&contents);
    }

    section
}

/// Writes the buffered gitignore text to `filename`, overwriting any existing file.
fn write_to_file(filename: &str, contents: &str) -> Result<(), Box<dyn StdErr>> {
    let file = File::create(filename)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;

    info!("Generated {}", filename);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::testing::StaticHost;

    use std::fs;

    use tempfile::NamedTempFile;

    fn source_with_entries(repo: &str, branch: &str, entries: &[&str]) -> Source {
        let mut source = Source::new(repo, branch);
        source.entries = entries.iter().map(|entry| entry.to_string()).collect();
        source
    }

    fn generate(config: &Config, host: &dyn TemplateHost) -> String {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        inflate(config, &path, host).unwrap();

        fs::read_to_string(&path).unwrap()
    }

    #[test]
    /// Assert an empty config yields only the header line.
    fn inflate_empty_config_test() {
        let generated = generate(&Config::default(), &StaticHost::new());

        assert_eq!(
            generated,
            "#### Auto-generated .gitignore by ignoreit tool (schema version: 1) ####\n"
        );
    }

    #[test]
    /// Assert sections appear per source & entry, custom patterns last.
    fn inflate_sections_test() {
        let mut config = Config::default();
        config.sources = vec![source_with_entries("github/gitignore", "master", &["Go"])];
        config.custom = vec![".custompattern".to_owned(), "*.swp".to_owned()];

        let host = StaticHost::new().insert(
            "https://raw.githubusercontent.com/github/gitignore/master/Go.gitignore",
            "*.o\n*.test\n",
        );

        let generated = generate(&config, &host);

        assert_eq!(
            generated,
            "#### Auto-generated .gitignore by ignoreit tool (schema version: 1) ####\n\
             \n\
             ### Source: github/gitignore - master ###\n\
             \n\
             ## Entry: Go ##\n\
             *.o\n\
             *.test\n\
             \n\
             ### Custom Patterns ###\n\
             \n\
             .custompattern\n\
             *.swp\n"
        );
    }

    #[test]
    /// Assert fetch misses skip the entry header while later entries still render.
    fn inflate_skips_missing_entries_test() {
        let mut config = Config::default();
        config.sources = vec![
            source_with_entries("github/gitignore", "master", &["Ada", "Go"]),
            source_with_entries("other/repo", "dev", &["Zig"]),
        ];

        // Only "Go" resolves; "Ada" & the whole second source fetch empty.
        let host = StaticHost::new().insert(
            "https://raw.githubusercontent.com/github/gitignore/master/Go.gitignore",
            "*.o\n",
        );

        let generated = generate(&config, &host);

        assert_eq!(
            generated,
            "#### Auto-generated .gitignore by ignoreit tool (schema version: 1) ####\n\
             \n\
             ### Source: github/gitignore - master ###\n\
             \n\
             ## Entry: Go ##\n\
             *.o\n\
             \n\
             ### Source: other/repo - dev ###\n"
        );
    }
}
