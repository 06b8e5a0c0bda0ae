use std::{
    collections::VecDeque,
    str::FromStr,
};

use super::{
    raw,
    Id,
};
use crate::Protobuf;

/// The length of the sha256 hash in an ICS20 denomination of the form `ibc/<hex hash>`.
pub const IBC_HASH_LEN: usize = 32;

const IBC_PREFIX: &str = "ibc";

/// A denomination of the form `[port/channel/..]base_denom`.
///
/// A denomination without path segments names an asset native to the chain.
/// One with segments names an asset that was transferred over the listed
/// port/channel pairs, the left-most pair being the last hop. The full display
/// string of the denomination is what is hashed to obtain its asset [`Id`].
///
/// A base denomination may also be an ICS20 hash of the form `ibc/<hex hash>`,
/// like `ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2`.
/// Its hex digits are kept as given.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Denom {
    trace: TraceSegments,
    base_denom: String,
}

impl Denom {
    /// Returns the asset ID of this denomination.
    #[must_use]
    pub fn id(&self) -> Id {
        Id::from_base_denom(&self.to_string())
    }

    #[must_use]
    pub fn trace_is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Checks if the denom has `port` in left-most position.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetkit_core::asset::Denom;
    /// let denom = "four/segments/of/a/denom".parse::<Denom>().unwrap();
    /// assert!(denom.has_leading_port("four"));
    /// assert!(!denom.has_leading_port("segments"));
    /// assert!(!denom.has_leading_port("denom"));
    /// assert!(!denom.has_leading_port(""));
    /// ```
    #[must_use]
    pub fn has_leading_port<T: AsRef<str>>(&self, port: T) -> bool {
        self.trace.leading_port() == Some(port.as_ref())
    }

    /// Checks if the denom has `channel` in left-most position.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetkit_core::asset::Denom;
    /// let denom = "four/segments/of/a/denom".parse::<Denom>().unwrap();
    /// assert!(!denom.has_leading_channel("four"));
    /// assert!(denom.has_leading_channel("segments"));
    /// assert!(!denom.has_leading_channel("of"));
    /// ```
    #[must_use]
    pub fn has_leading_channel<T: AsRef<str>>(&self, channel: T) -> bool {
        self.trace.leading_channel() == Some(channel.as_ref())
    }

    #[must_use]
    pub fn leading_port(&self) -> Option<&str> {
        self.trace.leading_port()
    }

    /// Returns the channel in the left-most position.
    ///
    /// Returns `None` if the denom only contains a base and has no path segments.
    /// A path segment is a pair `"<port>/<channel>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetkit_core::asset::Denom;
    /// let has_leading = "four/segments/of/a/denom".parse::<Denom>().unwrap();
    /// let no_leading = "no_segments".parse::<Denom>().unwrap();
    /// assert_eq!(has_leading.leading_channel(), Some("segments"));
    /// assert_eq!(no_leading.leading_channel(), None);
    /// ```
    #[must_use]
    pub fn leading_channel(&self) -> Option<&str> {
        self.trace.leading_channel()
    }

    pub fn pop_leading_port_and_channel(&mut self) -> Option<PortAndChannel> {
        self.trace.pop()
    }

    pub fn push_trace_segment(&mut self, segment: PortAndChannel) {
        self.trace.push(segment);
    }

    /// Calculates the length of the display formatted [`Denom`] without allocating a String.
    #[must_use]
    pub fn display_len(&self) -> usize {
        let mut len: usize = 0;
        for segment in &self.trace.inner {
            // 2 additional "/" characters
            len = len.saturating_add(segment.port.len() + segment.channel.len() + 2);
        }
        len.saturating_add(self.base_denom.len())
    }

    pub fn trace(&self) -> impl Iterator<Item = (&str, &str)> {
        self.trace
            .inner
            .iter()
            .map(|segment| (segment.port.as_str(), segment.channel.as_str()))
    }

    #[must_use]
    pub fn base_denom(&self) -> &str {
        &self.base_denom
    }

    /// Returns the decoded hash if the base denomination is of the form `ibc/<hex hash>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetkit_core::asset::Denom;
    /// let denom = format!("ibc/{}", "ab".repeat(32)).parse::<Denom>().unwrap();
    /// assert_eq!(Some([0xab; 32]), denom.ibc_hash());
    /// assert_eq!(None, "uatom".parse::<Denom>().unwrap().ibc_hash());
    /// ```
    #[must_use]
    pub fn ibc_hash(&self) -> Option<[u8; IBC_HASH_LEN]> {
        use hex::FromHex as _;
        let hash = self.base_denom.strip_prefix(IBC_PREFIX)?.strip_prefix('/')?;
        <[u8; IBC_HASH_LEN]>::from_hex(hash).ok()
    }
}

impl PartialOrd for Denom {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Denom {
    /// Orders denominations by the bytes of their display-formatted strings
    /// without allocating them.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.display_bytes().cmp(other.display_bytes())
    }
}

impl Denom {
    fn display_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.trace
            .inner
            .iter()
            .flat_map(|segment| {
                segment
                    .port
                    .bytes()
                    .chain(std::iter::once(b'/'))
                    .chain(segment.channel.bytes())
                    .chain(std::iter::once(b'/'))
            })
            .chain(self.base_denom.bytes())
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct TraceSegments {
    inner: VecDeque<PortAndChannel>,
}

impl TraceSegments {
    fn new() -> Self {
        Self {
            inner: VecDeque::new(),
        }
    }

    fn leading_port(&self) -> Option<&str> {
        self.inner.front().map(|segment| &*segment.port)
    }

    fn leading_channel(&self) -> Option<&str> {
        self.inner.front().map(|segment| &*segment.channel)
    }

    fn push(&mut self, seg: PortAndChannel) {
        self.inner.push_back(seg);
    }

    fn pop(&mut self) -> Option<PortAndChannel> {
        self.inner.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromStr for TraceSegments {
    type Err = ParseDenomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split = s.split('/');
        let mut parsed_segments = TraceSegments::new();
        loop {
            let Some(port) = split.next() else {
                break;
            };
            let Some(channel) = split.next() else {
                return Err(Self::Err::port_without_channel());
            };
            if port.is_empty() {
                return Err(Self::Err::port_is_empty());
            }
            if channel.is_empty() {
                return Err(Self::Err::channel_is_empty());
            }
            parsed_segments.push(PortAndChannel {
                port: port.into(),
                channel: channel.into(),
            });
        }
        Ok(parsed_segments)
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct PortAndChannel {
    port: String,
    channel: String,
}

impl PortAndChannel {
    /// Constructs a trace segment from its port and channel.
    ///
    /// # Errors
    /// Returns an error if either part is empty, is not ASCII, or contains
    /// whitespace or `/`.
    pub fn new<P: Into<String>, C: Into<String>>(
        port: P,
        channel: C,
    ) -> Result<Self, ParseDenomError> {
        let port = port.into();
        let channel = channel.into();
        if port.is_empty() {
            return Err(ParseDenomError::port_is_empty());
        }
        if channel.is_empty() {
            return Err(ParseDenomError::channel_is_empty());
        }
        for part in [&port, &channel] {
            if !part.is_ascii() {
                return Err(ParseDenomError::not_ascii());
            }
            if part.chars().any(char::is_whitespace) {
                return Err(ParseDenomError::whitespace());
            }
            if part.contains('/') {
                return Err(ParseDenomError::slash_in_segment());
            }
        }
        Ok(Self {
            port,
            channel,
        })
    }

    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }
}

impl std::fmt::Display for Denom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.trace.inner {
            f.write_str(&segment.port)?;
            f.write_str("/")?;
            f.write_str(&segment.channel)?;
            f.write_str("/")?;
        }
        f.write_str(&self.base_denom)
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ParseDenomError(ParseDenomErrorKind);

impl ParseDenomError {
    fn base_is_empty() -> Self {
        Self(ParseDenomErrorKind::BaseIsEmpty)
    }

    fn ibc_hash(source: hex::FromHexError) -> Self {
        Self(ParseDenomErrorKind::IbcHash {
            source,
        })
    }

    fn channel_is_empty() -> Self {
        Self(ParseDenomErrorKind::ChannelIsEmpty)
    }

    fn port_is_empty() -> Self {
        Self(ParseDenomErrorKind::PortIsEmpty)
    }

    fn not_ascii() -> Self {
        Self(ParseDenomErrorKind::NotAscii)
    }

    fn port_without_channel() -> Self {
        Self(ParseDenomErrorKind::PortWithoutChannel)
    }

    fn slash_in_segment() -> Self {
        Self(ParseDenomErrorKind::SlashInSegment)
    }

    fn whitespace() -> Self {
        Self(ParseDenomErrorKind::Whitespace)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum ParseDenomErrorKind {
    #[error("the input itself or its base denom segment is empty")]
    BaseIsEmpty,
    #[error("a port segment was empty")]
    PortIsEmpty,
    #[error("a channel segment was empty")]
    ChannelIsEmpty,
    #[error("input contained non-ascii characters")]
    NotAscii,
    #[error("input contains whitespace")]
    Whitespace,
    #[error(
        "the denom trace path was lopsided, there was one port without matching channel segment"
    )]
    PortWithoutChannel,
    #[error("a port or channel contained `/`")]
    SlashInSegment,
    #[error("the hash of an `ibc/<hash>` base denom was not {IBC_HASH_LEN} hex encoded bytes")]
    IbcHash { source: hex::FromHexError },
}

impl FromStr for Denom {
    type Err = ParseDenomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() {
            return Err(Self::Err::not_ascii());
        }
        if s.as_bytes().iter().any(u8::is_ascii_whitespace) {
            return Err(Self::Err::whitespace());
        }
        let (trace, base_denom) = match s.rsplit_once('/') {
            Some((path, hash)) if ends_in_ibc_prefix(path) => {
                use hex::FromHex as _;
                <[u8; IBC_HASH_LEN]>::from_hex(hash).map_err(Self::Err::ibc_hash)?;
                let base_start = path.len() - IBC_PREFIX.len();
                let trace = match path[..base_start].strip_suffix('/') {
                    Some(path) => path.parse::<TraceSegments>()?,
                    None => TraceSegments::new(),
                };
                (trace, &s[base_start..])
            }
            Some((path, base)) => (path.parse::<TraceSegments>()?, base),
            None => (TraceSegments::new(), s),
        };
        if base_denom.is_empty() {
            return Err(Self::Err::base_is_empty());
        }
        Ok(Self {
            base_denom: base_denom.into(),
            trace,
        })
    }
}

/// Returns if the last segment of `path` is `ibc` and is not the channel of a port/channel pair.
fn ends_in_ibc_prefix(path: &str) -> bool {
    let mut segments = path.rsplit('/');
    segments.next() == Some(IBC_PREFIX) && segments.count() % 2 == 0
}

impl Protobuf for Denom {
    type Error = ParseDenomError;
    type Raw = raw::Denom;

    fn try_from_raw_ref(raw: &Self::Raw) -> Result<Self, Self::Error> {
        raw.denom.parse()
    }

    fn to_raw(&self) -> Self::Raw {
        raw::Denom {
            denom: self.to_string(),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{
        Deserialize,
        Deserializer,
        Serialize,
        Serializer,
    };

    use super::Denom;

    impl<'de> Deserialize<'de> for Denom {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            use serde::de::Error as _;
            let s = std::borrow::Cow::<'_, str>::deserialize(deserializer)?;
            s.trim().parse().map_err(D::Error::custom)
        }
    }

    impl Serialize for Denom {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        raw,
        Denom,
        Id,
        ParseDenomErrorKind,
        PortAndChannel,
    };
    use crate::Protobuf as _;

    #[test]
    fn parse_errors() {
        use ParseDenomErrorKind::{
            BaseIsEmpty,
            ChannelIsEmpty,
            NotAscii,
            PortIsEmpty,
            PortWithoutChannel,
            Whitespace,
        };
        #[track_caller]
        fn assert_error(input: &str, kind: ParseDenomErrorKind) {
            let error = input
                .parse::<Denom>()
                .expect_err("an error was expected, but a valid denomination was returned");
            assert_eq!(kind, error.0);
        }
        assert_error("path/to/", BaseIsEmpty);
        assert_error("path//denom", ChannelIsEmpty);
        assert_error("/to/denom", PortIsEmpty);
        assert_error("path/denom", PortWithoutChannel);
        assert_error("path/ /to/denom", Whitespace);
        assert_error("path/to /denom", Whitespace);
        assert_error("path/to/ denom", Whitespace);
        assert_error(" path/to/denom", Whitespace);
        assert_error("path/to/denom ", Whitespace);
        assert_error("path/🦀/denom", NotAscii);
        assert_error("", BaseIsEmpty);
    }

    #[test]
    fn ibc_hash_base_denoms_are_parsed() {
        const HASH: &str = "27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2";
        let input = format!("ibc/{HASH}");
        let denom = input.parse::<Denom>().unwrap();
        assert!(denom.trace_is_empty());
        assert_eq!(input, denom.base_denom());
        assert_eq!(input, denom.to_string());
        assert_eq!(input.len(), denom.display_len());
        assert_eq!(Id::from_base_denom(&input), denom.id());
        assert_eq!(
            hex::decode(HASH).unwrap(),
            denom.ibc_hash().unwrap().to_vec()
        );

        let traced = format!("transfer/channel-0/ibc/{HASH}");
        let mut denom = traced.parse::<Denom>().unwrap();
        assert_eq!(traced, denom.to_string());
        assert_eq!(input, denom.base_denom());
        let segment = denom.pop_leading_port_and_channel().unwrap();
        assert_eq!(("transfer", "channel-0"), (segment.port(), segment.channel()));
        assert_eq!(input, denom.to_string());
    }

    #[test]
    fn ibc_as_channel_is_a_trace_segment() {
        let denom = "transfer/ibc/uatom".parse::<Denom>().unwrap();
        assert_eq!(vec![("transfer", "ibc")], denom.trace().collect::<Vec<_>>());
        assert_eq!("uatom", denom.base_denom());
        assert_eq!(None, denom.ibc_hash());
    }

    #[test]
    fn malformed_ibc_hashes_are_rejected() {
        for input in ["ibc/", "ibc/not-hex", "ibc/ABCD", "a/b/ibc/xyz"] {
            let error = input
                .parse::<Denom>()
                .expect_err("a malformed ibc hash must not parse");
            assert!(
                matches!(error.0, ParseDenomErrorKind::IbcHash { .. }),
                "unexpected error for `{input}`: {error:?}",
            );
        }
    }

    #[test]
    fn parse_and_format_are_inverse() {
        #[track_caller]
        fn assert_formatting(input: &str) {
            let denom = input.parse::<Denom>().unwrap();
            let output = denom.to_string();
            assert_eq!(input, output);
        }
        assert_formatting("upenumbra");
        assert_formatting("transfer/channel-0/uatom");
        assert_formatting("slightly/longer/path/to/denom");
    }

    #[test]
    fn id_hashes_the_full_denomination() {
        let denom = "transfer/channel-0/uatom".parse::<Denom>().unwrap();
        assert_eq!(Id::from_base_denom("transfer/channel-0/uatom"), denom.id());
        assert_ne!(Id::from_base_denom("uatom"), denom.id());
    }

    #[test]
    fn pop_path() {
        let mut denom = "a/long/path/to/denom".parse::<Denom>().unwrap();
        let port_and_channel = denom.pop_leading_port_and_channel().unwrap();
        assert_eq!("a", port_and_channel.port());
        assert_eq!("long", port_and_channel.channel());

        let port_and_channel = denom.pop_leading_port_and_channel().unwrap();
        assert_eq!("path", port_and_channel.port());
        assert_eq!("to", port_and_channel.channel());

        assert_eq!(None, denom.pop_leading_port_and_channel());
        assert!(denom.trace_is_empty());
        assert_eq!("denom", denom.to_string());
    }

    #[test]
    fn pushed_segments_are_appended_after_existing_ones() {
        let mut source = "transfer/channel-7/uatom".parse::<Denom>().unwrap();
        let segment = source.pop_leading_port_and_channel().unwrap();
        let mut denom = "transfer/channel-0/uatom".parse::<Denom>().unwrap();
        denom.push_trace_segment(segment);
        assert_eq!("transfer/channel-0/transfer/channel-7/uatom", denom.to_string());
        assert_eq!(
            vec![("transfer", "channel-0"), ("transfer", "channel-7")],
            denom.trace().collect::<Vec<_>>(),
        );
    }

    #[test]
    fn constructed_segments_are_validated() {
        let mut denom = "uatom".parse::<Denom>().unwrap();
        denom.push_trace_segment(PortAndChannel::new("transfer", "channel-0").unwrap());
        assert_eq!("transfer/channel-0/uatom", denom.to_string());

        for (port, channel, kind) in [
            ("", "channel-0", ParseDenomErrorKind::PortIsEmpty),
            ("transfer", "", ParseDenomErrorKind::ChannelIsEmpty),
            ("trans fer", "channel-0", ParseDenomErrorKind::Whitespace),
            ("transfer", "chännel", ParseDenomErrorKind::NotAscii),
            ("transfer/x", "channel-0", ParseDenomErrorKind::SlashInSegment),
        ] {
            let error = PortAndChannel::new(port, channel)
                .expect_err("an invalid segment must not be constructed");
            assert_eq!(kind, error.0);
        }
    }

    #[test]
    fn display_len_outputs_expected_length() {
        #[track_caller]
        fn assert_correct_display_len(denom_str: &str) {
            let denom = denom_str.parse::<Denom>().unwrap();
            assert_eq!(denom_str.len(), denom.display_len());
        }
        assert_correct_display_len("0123456789");
        assert_correct_display_len("path_with-special^characters!@#$%&*()+={}|;:?<>,.`~");
        assert_correct_display_len("MixedCasePath");
        assert_correct_display_len("denom");
        assert_correct_display_len("short/path/denom");
        assert_correct_display_len("a/very/long/path/to/the/denom");
    }

    #[test]
    fn ord_matches_lexical_sort() {
        let mut denoms = vec![
            "ethan/was/here".parse::<Denom>().unwrap(),
            "upenumbra".parse::<Denom>().unwrap(),
            "pretty/long/trace/prefixed/denom".parse::<Denom>().unwrap(),
            "_using/underscore/here".parse::<Denom>().unwrap(),
            "transfer/channel-0/uatom".parse::<Denom>().unwrap(),
            "transfer".parse::<Denom>().unwrap(),
            "a-b".parse::<Denom>().unwrap(),
            "a/b/c".parse::<Denom>().unwrap(),
        ];
        let mut lexical = denoms.clone();
        denoms.sort_unstable();
        lexical.sort_unstable_by_key(ToString::to_string);
        assert_eq!(denoms, lexical);
    }

    #[test]
    fn raw_denom_is_validated() {
        let raw = raw::Denom {
            denom: "transfer/channel-0/uatom".to_string(),
        };
        let denom = Denom::try_from_raw_ref(&raw).unwrap();
        assert_eq!(raw, denom.into_raw());

        Denom::try_from_raw(raw::Denom {
            denom: String::new(),
        })
        .expect_err("an empty raw denom must not be accepted");
    }
}
