//! Settings parser. Not very pretty code, but it's fast and it doesn't allocate
use super::*;

#[derive(PartialEq, PartialOrd, Debug, thiserror::Error)]
pub enum SettingsError<'s> {
    /// Unknown setting name
    #[error("unknown setting `{0}`")]
    Command(&'s str),
    #[error("expected `{0}`")]
    Expected(&'static str),
    /// Value could not be converted to the type of the setting
    #[error("invalid value `{0}`")]
    Conversion(&'s str),
}

fn take_while<F: Fn(char) -> bool>(input: &str, pred: F) -> (&str, &str) {
    let mut iter = input.chars();
    loop {
        let rest = iter.as_str();
        match iter.next() {
            Some(c) if pred(c) => {}
            _ => {
                let ret = &input[..input.len() - rest.len()];
                return (ret, rest);
            }
        }
    }
}

#[inline]
fn take_whitespace(input: &str) -> &str {
    input.trim_start_matches(char::is_whitespace)
}

#[inline]
fn take_word(input: &str) -> (&str, &str) {
    take_while(input, |ch| !ch.is_whitespace())
}

fn expect<'s>(input: &'s str, m: &'static str) -> Option<&'s str> {
    input.strip_prefix(m)
}

/// Read `= value`, returning the value word and the remaining input
fn take_value(input: &str) -> Result<(&str, &str), SettingsError<'_>> {
    let input = take_whitespace(
        expect(take_whitespace(input), "=").ok_or(SettingsError::Expected("="))?,
    );
    Ok(take_word(input))
}

fn parse_setting<'s>(input: &'s str, settings: &mut Settings) -> Result<&'s str, SettingsError<'s>> {
    let (cmd, input) = take_while(take_whitespace(input), |ch| {
        !ch.is_whitespace() && ch != '='
    });
    let (value, rest) = take_value(input)?;
    match cmd {
        "score_threshold" => {
            settings.score_threshold = value
                .parse::<f64>()
                .map_err(|_| SettingsError::Conversion(value))?;
        }
        "score_filtering" => {
            settings.score_filtering = value
                .parse::<bool>()
                .map_err(|_| SettingsError::Conversion(value))?;
        }
        "peptides_per_protein" => {
            settings.peptides_per_protein = value
                .parse::<usize>()
                .map_err(|_| SettingsError::Conversion(value))?;
        }
        _ => return Err(SettingsError::Command(cmd)),
    }
    Ok(rest)
}

pub(super) fn parse(mut input: &str) -> Result<Settings, SettingsError<'_>> {
    let mut settings = Settings::default();
    loop {
        input = take_whitespace(input);
        if input.is_empty() {
            break;
        }
        input = parse_setting(input, &mut settings)?;
    }
    Ok(settings)
}
