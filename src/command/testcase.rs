extern crate clap;
extern crate termcolor;
extern crate tokio;

use crate::{read::read_answer, write::write_result};
use clap::ArgMatches;
use termcolor::StandardStream;
use wpcs2_client::{config::env::CONTEST, Error, RelayClient, Result};

/// Problem letter to zero-based index: `a`/`A` is problem 0.
pub fn problem_index(letter: &str) -> Result<usize> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Ok((c.to_ascii_lowercase() as u8 - b'a') as usize)
        }
        _ => Err(Error::Config(format!(
            "problem must be a letter A-Z, got {:?}",
            letter
        ))),
    }
}

pub fn contest_id(raw: Option<&str>) -> Result<u64> {
    let raw = raw.ok_or_else(|| Error::Config(format!("${} is not set", CONTEST)))?;
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("contest id must be a number, got {:?}", raw)))
}

struct Target<'a> {
    contest: u64,
    index: usize,
    label: &'a str,
}
fn target(sub: &ArgMatches) -> Result<Target<'_>> {
    Ok(Target {
        contest: contest_id(sub.value_of("contest"))?,
        index: problem_index(sub.value_of("problem").unwrap_or_default())?,
        label: sub.value_of("size").unwrap_or_default(),
    })
}

pub async fn get(relay: &str, sub: &ArgMatches) -> Result<()> {
    let t = target(sub)?;
    let client = RelayClient::new(relay)?;
    client
        .get(t.contest, t.index, t.label, &mut tokio::io::stdout())
        .await?;
    Ok(())
}

pub async fn submit(stdout: &mut StandardStream, relay: &str, sub: &ArgMatches) -> Result<()> {
    let t = target(sub)?;
    let answer = read_answer().await?;
    let client = RelayClient::new(relay)?;
    let result = client
        .submit(t.contest, t.index, t.label, answer.as_str())
        .await?;
    write_result(stdout, &result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_indices() {
        assert_eq!(problem_index("a").unwrap(), 0);
        assert_eq!(problem_index("A").unwrap(), 0);
        assert_eq!(problem_index("c").unwrap(), 2);
        assert_eq!(problem_index("Z").unwrap(), 25);
    }

    #[test]
    fn rejects_non_letters() {
        for bad in &["", "1", "ab", "\u{3042}"] {
            assert!(matches!(problem_index(bad), Err(Error::Config(_))), "{:?}", bad);
        }
    }

    #[test]
    fn contest_id_parsing() {
        assert_eq!(contest_id(Some("7")).unwrap(), 7);
        assert_eq!(contest_id(Some(" 12 ")).unwrap(), 12);
        assert!(matches!(contest_id(Some("seven")), Err(Error::Config(_))));
        let err = contest_id(None).unwrap_err();
        assert!(err.to_string().contains(CONTEST));
    }
}
