use anyhow::{Context, Result};

pub fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn parse_seeds(input: &str) -> Result<Vec<u64>> {
    split_csv(input)
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed {token:?}"))
        })
        .collect()
}
