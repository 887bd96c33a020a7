//! Expansion of grouped member addresses.

use crate::error::{AddressFormatError, Result};

/// Expands member address specifications into a flat list of
/// `host:port` addresses.
///
/// Each specification is either a plain address, emitted unchanged, or
/// a grouped form `host:port[group;group;...]`. In the grouped form
/// only the host before the first `:` is reused; the port stated
/// before the bracket is not part of the expansion. Every group is a
/// single port (`5701`) or an inclusive ascending range (`5701-5703`).
///
/// When `self_address` is provided, entries exactly equal to it are
/// removed from the result, so a node does not list itself among its
/// own peers. Comparison is plain string equality; no normalization is
/// performed.
///
/// Expansion preserves input order and does not deduplicate. On any
/// malformed specification the whole call fails and no partial output
/// is returned.
///
/// # Example
///
/// ```
/// use kiln_core::expand_members;
///
/// let specs = vec![
///     "10.0.0.1:0[5701;5703-5705]".to_string(),
///     "10.0.0.2:5701".to_string(),
/// ];
///
/// let members = expand_members(&specs, Some("10.0.0.1:5701")).unwrap();
/// assert_eq!(
///     members,
///     ["10.0.0.1:5703", "10.0.0.1:5704", "10.0.0.1:5705", "10.0.0.2:5701"]
/// );
/// ```
pub fn expand_members(specs: &[String], self_address: Option<&str>) -> Result<Vec<String>> {
    let mut members = Vec::new();

    for spec in specs {
        expand_spec(spec, &mut members)?;
    }

    if let Some(own) = self_address {
        members.retain(|member| member != own);
    }

    Ok(members)
}

/// Expands one address specification into `out`.
fn expand_spec(spec: &str, out: &mut Vec<String>) -> Result<()> {
    if spec.is_empty() {
        return Err(AddressFormatError::EmptySpec);
    }

    let Some(open) = spec.find('[') else {
        // Plain member addresses like 10.0.0.1:5701
        if !spec.contains(':') {
            return Err(AddressFormatError::missing_separator(spec));
        }

        out.push(spec.to_string());
        return Ok(());
    };

    // Only the host survives from the part before the bracket; the
    // stated port is discarded once a bracket group is present.
    let host = match spec.find(':') {
        Some(colon) => &spec[..colon],
        None => return Err(AddressFormatError::missing_separator(spec)),
    };

    let close = spec
        .find(']')
        .filter(|close| *close > open)
        .ok_or_else(|| AddressFormatError::unbalanced_bracket(spec))?;

    let interior = &spec[open + 1..close];
    if interior.is_empty() {
        return Err(AddressFormatError::empty_group(spec));
    }

    for group in interior.split(';') {
        expand_group(spec, host, group, out)?;
    }

    Ok(())
}

/// Expands one port group (`5701` or `5701-5703`) against `host`.
fn expand_group(spec: &str, host: &str, group: &str, out: &mut Vec<String>) -> Result<()> {
    if group.is_empty() {
        return Err(AddressFormatError::empty_group(spec));
    }

    let bounds: Vec<&str> = group.split('-').collect();

    match bounds.as_slice() {
        [port] => {
            // Explicit port definitions e.g. 5701
            let port = parse_port(spec, group, port)?;
            out.push(format!("{}:{}", host, port));
        }
        [low, high] => {
            // Port ranges e.g. 5701-5703, inclusive both ends
            let low = parse_port(spec, group, low)?;
            let high = parse_port(spec, group, high)?;

            if low > high {
                return Err(AddressFormatError::inverted_range(spec, group, low, high));
            }

            for port in low..=high {
                out.push(format!("{}:{}", host, port));
            }
        }
        _ => return Err(AddressFormatError::malformed_group(spec, group)),
    }

    Ok(())
}

/// Parses a single port token.
fn parse_port(spec: &str, group: &str, token: &str) -> Result<u16> {
    token
        .parse()
        .map_err(|_| AddressFormatError::invalid_port(spec, group, token))
}
