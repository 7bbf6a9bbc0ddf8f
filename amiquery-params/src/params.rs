// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    dedup::dedup,
    error::ParamsError,
    keys::{KeyNames, QueryKey},
};
use amiquery_util::FormQuery;
use serde::Serialize;
use std::{collections::BTreeMap, mem::take, str::FromStr};

/// Image filter, decoded from a request query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterParams {
    account_id: String,
    callback: String,
    pretty: bool,
    regions: Vec<String>,
    images: Vec<String>,
    tags: BTreeMap<String, Vec<String>>,
}

impl FilterParams {
    /// Decode `raw_query` into `self`, using the default key names.
    ///
    /// On error the contents of `self` are unspecified and must be discarded.
    pub fn decode(&mut self, raw_query: &str) -> Result<(), ParamsError> {
        ParamsDecoder::default().decode_into(self, raw_query)
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The JSONP callback name. Empty if none was requested.
    pub fn callback(&self) -> &str {
        &self.callback
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Tag name to accepted tag values.
    pub fn tags(&self) -> &BTreeMap<String, Vec<String>> {
        &self.tags
    }
}

impl FromStr for FilterParams {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamsDecoder::default().decode(s)
    }
}

/// Decodes query strings into [FilterParams].
#[derive(Debug, Clone, Default)]
pub struct ParamsDecoder {
    keys: KeyNames,
}

impl ParamsDecoder {
    pub fn new(keys: KeyNames) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &KeyNames {
        &self.keys
    }

    /// Decode a raw query string (without the leading `?`).
    pub fn decode(&self, raw_query: &str) -> Result<FilterParams, ParamsError> {
        let mut params = FilterParams::default();
        self.decode_into(&mut params, raw_query)?;
        Ok(params)
    }

    /// Decode a raw query string into an existing [FilterParams].
    ///
    /// Keys are processed in the order of their first appearance.
    /// The first unknown key or malformed tag aborts decoding.
    pub fn decode_into(
        &self,
        params: &mut FilterParams,
        raw_query: &str,
    ) -> Result<(), ParamsError> {
        let query: FormQuery = raw_query.parse().inspect_err(|e| {
            log::debug!("Rejecting query: {e}");
        })?;

        for (name, values) in query.iter() {
            let Some(key) = self.keys.lookup(name) else {
                log::debug!("Rejecting query: Unknown key '{name}'.");
                return Err(ParamsError::UnknownKey(name.to_string()));
            };
            log::trace!("Query key {key:?}: {values:?}");

            match key {
                QueryKey::AccountId => {
                    if let Some(value) = values.last() {
                        params.account_id.clone_from(value);
                    }
                }
                QueryKey::Callback => {
                    if let Some(value) = values.last() {
                        params.callback.clone_from(value);
                    }
                }
                QueryKey::Pretty => {
                    params.pretty = true;
                }
                QueryKey::Region => {
                    params.regions.extend_from_slice(values);
                }
                QueryKey::Image => {
                    params.images.extend_from_slice(values);
                }
                QueryKey::Tag => {
                    for value in values {
                        let (tag_name, tag_value) = split_tag(value)?;
                        params
                            .tags
                            .entry(tag_name.to_string())
                            .or_default()
                            .push(tag_value.to_string());
                    }
                }
                QueryKey::State => {
                    params
                        .tags
                        .entry(self.keys.state().to_string())
                        .or_default()
                        .extend_from_slice(values);
                }
            }
        }

        params.regions = dedup(take(&mut params.regions));
        params.images = dedup(take(&mut params.images));
        for values in params.tags.values_mut() {
            *values = dedup(take(values));
        }
        Ok(())
    }
}

/// Split a `name:value` tag. Exactly one colon is allowed.
fn split_tag(tag: &str) -> Result<(&str, &str), ParamsError> {
    let mut split = tag.split(':');
    match (split.next(), split.next(), split.next()) {
        (Some(name), Some(value), None) => Ok((name, value)),
        _ => {
            log::debug!("Rejecting query: Invalid tag value '{tag}'.");
            Err(ParamsError::InvalidTagValue(tag.to_string()))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tags(v: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        v.iter()
            .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_decode_state() {
        let p: FilterParams = "state=available&state=deprecated&state=available"
            .parse()
            .unwrap();
        assert!(p.regions().is_empty());
        assert!(p.images().is_empty());
        assert_eq!(*p.tags(), tags(&[("state", &["available", "deprecated"])]));
    }

    #[test]
    fn test_decode_tags() {
        let p: FilterParams = "tag=foo1:bar&tag=foo2:bar&tag=foo1:baz&tag=foo1:baz&tag=foo2:baz"
            .parse()
            .unwrap();
        assert!(p.regions().is_empty());
        assert!(p.images().is_empty());
        assert_eq!(
            *p.tags(),
            tags(&[("foo1", &["bar", "baz"]), ("foo2", &["bar", "baz"])])
        );
    }

    #[test]
    fn test_decode_tags_and_state() {
        let p: FilterParams = "tag=state:exception&state=available&tag=Name:web%20server"
            .parse()
            .unwrap();
        assert_eq!(
            *p.tags(),
            tags(&[
                ("Name", &["web server"]),
                ("state", &["exception", "available"]),
            ])
        );
    }

    #[test]
    fn test_decode_images() {
        let p: FilterParams = "ami=ami-1a2b3c4d&ami=ami-2a2b3c4d&ami=ami-3a2b3c4d&ami=ami-2a2b3c4d"
            .parse()
            .unwrap();
        assert_eq!(p.images(), ["ami-1a2b3c4d", "ami-2a2b3c4d", "ami-3a2b3c4d"]);
        assert!(p.regions().is_empty());
        assert!(p.tags().is_empty());
    }

    #[test]
    fn test_decode_regions() {
        let p: FilterParams = "region=us-west-2&region=us-east-1&region=us-west-2"
            .parse()
            .unwrap();
        assert_eq!(p.regions(), ["us-west-2", "us-east-1"]);
        assert!(p.images().is_empty());
        assert!(p.tags().is_empty());
    }

    #[test]
    fn test_decode_account_id() {
        let p: FilterParams = "account_id=foo&account_id=bar&account_id=foo"
            .parse()
            .unwrap();
        assert_eq!(
            p,
            FilterParams {
                account_id: "foo".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_decode_callback() {
        let p: FilterParams = "callback=foo&callback=bar&callback=foo".parse().unwrap();
        assert_eq!(
            p,
            FilterParams {
                callback: "foo".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_decode_pretty() {
        let p: FilterParams = "pretty".parse().unwrap();
        assert_eq!(
            p,
            FilterParams {
                pretty: true,
                ..Default::default()
            }
        );

        let p: FilterParams = "pretty=false".parse().unwrap();
        assert!(p.pretty());
    }

    #[test]
    fn test_decode_empty() {
        let p: FilterParams = "".parse().unwrap();
        assert_eq!(p, FilterParams::default());
        assert_eq!(p.account_id(), "");
        assert_eq!(p.callback(), "");
        assert!(!p.pretty());
        assert!(p.tags().is_empty());
    }

    #[test]
    fn test_decode_in_place() {
        let mut p = FilterParams::default();
        p.decode("ami=ami-1&pretty&callback=cb;region=eu-west-1")
            .unwrap();
        assert_eq!(p.images(), ["ami-1"]);
        assert_eq!(p.regions(), ["eu-west-1"]);
        assert_eq!(p.callback(), "cb");
        assert!(p.pretty());
    }

    #[test]
    fn test_decode_custom_keys() {
        let dec = ParamsDecoder::new(KeyNames::new("aws_region", "status").unwrap());
        let p = dec
            .decode("aws_region=us-west-1&status=available&status=available")
            .unwrap();
        assert_eq!(p.regions(), ["us-west-1"]);
        assert_eq!(*p.tags(), tags(&[("status", &["available"])]));

        let e = dec.decode("region=us-west-1").unwrap_err();
        assert_eq!(e.to_string(), "unknown query key: region");
    }

    #[test]
    fn test_decode_bad_key() {
        let e = "foo=bar".parse::<FilterParams>().unwrap_err();
        assert_eq!(e, ParamsError::UnknownKey("foo".to_string()));
        assert_eq!(e.to_string(), "unknown query key: foo");

        // First unknown key in order of appearance.
        let e = "ami=x&zzz=1&aaa=2".parse::<FilterParams>().unwrap_err();
        assert_eq!(e.to_string(), "unknown query key: zzz");
    }

    #[test]
    fn test_decode_bad_tag_value() {
        let e = "tag=foo:bar:baz".parse::<FilterParams>().unwrap_err();
        assert_eq!(e, ParamsError::InvalidTagValue("foo:bar:baz".to_string()));
        assert_eq!(e.to_string(), "invalid query tag value: foo:bar:baz");

        let e = "tag=foo:bar&tag=foobar".parse::<FilterParams>().unwrap_err();
        assert_eq!(e.to_string(), "invalid query tag value: foobar");
    }

    #[test]
    fn test_decode_parse_error() {
        let e = "foo=%%bar".parse::<FilterParams>().unwrap_err();
        assert!(matches!(e, ParamsError::QueryParse(_)));
        assert_eq!(e.to_string(), r#"invalid URL escape "%%b""#);
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn test_split_tag() {
        assert_eq!(split_tag("Name:foo").unwrap(), ("Name", "foo"));
        assert_eq!(split_tag(":foo").unwrap(), ("", "foo"));
        assert_eq!(split_tag("Name:").unwrap(), ("Name", ""));
        assert!(split_tag("Name").is_err());
        assert!(split_tag("a:b:c").is_err());
    }
}

// vim: ts=4 sw=4 expandtab
