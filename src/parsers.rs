//! Moment-style format patterns: tokenizing, formatting and parsing.
//!
//! A pattern such as `"jYYYY/jMM/jDD HH:mm"` is split into tokens once by
//! [`FormatPattern::parse`] and can then be rendered or matched against an
//! input string. Tokens prefixed with `j` always
//! read solar Hijri fields; unprefixed year, month and day tokens follow the
//! calendar system the caller dispatched on.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    calendar::{CalendarFields, CalendarSystem},
    iso::IsoDateTime,
    locale::metadata::{Digits, LocaleMetadata},
    options::NameStyle,
};

/// Which calendar system a date token reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldCalendar {
    /// The system the operation was dispatched on.
    Active,
    /// Always solar Hijri.
    SolarHijri,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Year { two_digit: bool, calendar: FieldCalendar },
    Month { padded: bool, calendar: FieldCalendar },
    MonthName { style: NameStyle, calendar: FieldCalendar },
    Day { padded: bool, calendar: FieldCalendar },
    Weekday,
    WeekdayName(NameStyle),
    Hour { padded: bool, twelve_hour: bool },
    Minute { padded: bool },
    Second { padded: bool },
    Millisecond,
    Meridiem { uppercase: bool },
    Offset { colon: bool },
    /// `Z` for UTC instants, `±HH:MM` otherwise. Only used by ISO 8601.
    UtcDesignator,
    Literal(&'a str),
}

use FieldCalendar::{Active, SolarHijri};

// Longest token first, so `jMMMM` is never read as `jMMM` followed by `M`.
const PATTERN_TOKENS: &[(&str, Token<'static>)] = &[
    ("jYYYY", Token::Year { two_digit: false, calendar: SolarHijri }),
    ("jMMMM", Token::MonthName { style: NameStyle::Long, calendar: SolarHijri }),
    ("jMMM", Token::MonthName { style: NameStyle::Short, calendar: SolarHijri }),
    ("YYYY", Token::Year { two_digit: false, calendar: Active }),
    ("MMMM", Token::MonthName { style: NameStyle::Long, calendar: Active }),
    ("dddd", Token::WeekdayName(NameStyle::Long)),
    ("jMM", Token::Month { padded: true, calendar: SolarHijri }),
    ("jDD", Token::Day { padded: true, calendar: SolarHijri }),
    ("jYY", Token::Year { two_digit: true, calendar: SolarHijri }),
    ("MMM", Token::MonthName { style: NameStyle::Short, calendar: Active }),
    ("ddd", Token::WeekdayName(NameStyle::Short)),
    ("SSS", Token::Millisecond),
    ("jM", Token::Month { padded: false, calendar: SolarHijri }),
    ("jD", Token::Day { padded: false, calendar: SolarHijri }),
    ("YY", Token::Year { two_digit: true, calendar: Active }),
    ("MM", Token::Month { padded: true, calendar: Active }),
    ("DD", Token::Day { padded: true, calendar: Active }),
    ("dd", Token::WeekdayName(NameStyle::Narrow)),
    ("HH", Token::Hour { padded: true, twelve_hour: false }),
    ("hh", Token::Hour { padded: true, twelve_hour: true }),
    ("mm", Token::Minute { padded: true }),
    ("ss", Token::Second { padded: true }),
    ("ZZ", Token::Offset { colon: false }),
    ("M", Token::Month { padded: false, calendar: Active }),
    ("D", Token::Day { padded: false, calendar: Active }),
    ("d", Token::Weekday),
    ("H", Token::Hour { padded: false, twelve_hour: false }),
    ("h", Token::Hour { padded: false, twelve_hour: true }),
    ("m", Token::Minute { padded: false }),
    ("s", Token::Second { padded: false }),
    ("A", Token::Meridiem { uppercase: true }),
    ("a", Token::Meridiem { uppercase: false }),
    ("Z", Token::Offset { colon: true }),
];

const ISO_8601_TOKENS: &[Token<'static>] = &[
    Token::Year { two_digit: false, calendar: Active },
    Token::Literal("-"),
    Token::Month { padded: true, calendar: Active },
    Token::Literal("-"),
    Token::Day { padded: true, calendar: Active },
    Token::Literal("T"),
    Token::Hour { padded: true, twelve_hour: false },
    Token::Literal(":"),
    Token::Minute { padded: true },
    Token::Literal(":"),
    Token::Second { padded: true },
    Token::UtcDesignator,
];

/// A tokenized format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPattern<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> FormatPattern<'a> {
    /// Tokenizes `pattern`.
    ///
    /// Text inside `[...]` is always literal. Characters that start no
    /// token are kept as literal text, so tokenizing never fails.
    #[must_use]
    pub fn parse(pattern: &'a str) -> Self {
        let mut tokens = Vec::new();
        let mut literal_start = 0;
        let mut i = 0;
        while i < pattern.len() {
            let rest = &pattern[i..];
            if let Some(escaped) = rest.strip_prefix('[') {
                push_literal(&mut tokens, &pattern[literal_start..i]);
                match escaped.find(']') {
                    Some(end) => {
                        push_literal(&mut tokens, &escaped[..end]);
                        i += end + 2;
                    }
                    None => {
                        push_literal(&mut tokens, rest);
                        i = pattern.len();
                    }
                }
                literal_start = i;
                continue;
            }
            if let Some((text, token)) = PATTERN_TOKENS.iter().find(|(t, _)| rest.starts_with(t)) {
                push_literal(&mut tokens, &pattern[literal_start..i]);
                tokens.push(*token);
                i += text.len();
                literal_start = i;
                continue;
            }
            i += rest.chars().next().map_or(1, char::len_utf8);
        }
        push_literal(&mut tokens, &pattern[literal_start..]);
        Self { tokens }
    }

    /// The extended ISO 8601 date-time pattern, `YYYY-MM-DDTHH:mm:ss` with a
    /// trailing `Z` or `±HH:MM`.
    #[must_use]
    pub fn iso8601() -> FormatPattern<'static> {
        FormatPattern {
            tokens: ISO_8601_TOKENS.to_vec(),
        }
    }

    /// Returns whether the pattern contains no tokens at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub(crate) fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Returns whether any token reads a `j`-prefixed solar Hijri field.
    pub(crate) fn has_solar_hijri_tokens(&self) -> bool {
        self.tokens.iter().any(|token| {
            matches!(
                token,
                Token::Year { calendar: SolarHijri, .. }
                    | Token::Month { calendar: SolarHijri, .. }
                    | Token::MonthName { calendar: SolarHijri, .. }
                    | Token::Day { calendar: SolarHijri, .. }
            )
        })
    }
}

fn push_literal<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str) {
    if !text.is_empty() {
        tokens.push(Token::Literal(text));
    }
}

// ==== Formatting ====

/// An instant's fields ready to be rendered with a [`FormatPattern`].
#[derive(Debug)]
pub(crate) struct FormattedInstant<'a> {
    pub(crate) pattern: &'a FormatPattern<'a>,
    pub(crate) wall: IsoDateTime,
    pub(crate) offset_minutes: i16,
    pub(crate) utc: bool,
    pub(crate) active: CalendarFields,
    pub(crate) active_metadata: &'a LocaleMetadata,
    pub(crate) solar_hijri: CalendarFields,
    pub(crate) solar_hijri_metadata: &'a LocaleMetadata,
    pub(crate) digits: Digits,
}

impl FormattedInstant<'_> {
    fn fields(&self, calendar: FieldCalendar) -> CalendarFields {
        match calendar {
            Active => self.active,
            SolarHijri => self.solar_hijri,
        }
    }

    fn metadata(&self, calendar: FieldCalendar) -> &LocaleMetadata {
        match calendar {
            Active => self.active_metadata,
            SolarHijri => self.solar_hijri_metadata,
        }
    }

    fn write_number<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        value: i64,
        width: usize,
    ) -> fmt::Result {
        write_number(sink, value, width, self.digits)
    }

    fn write_offset<W: Write + ?Sized>(&self, sink: &mut W, colon: bool) -> fmt::Result {
        let sign = if self.offset_minutes < 0 { '-' } else { '+' };
        let minutes = i64::from(self.offset_minutes.unsigned_abs());
        sink.write_char(sign)?;
        self.write_number(sink, minutes / 60, 2)?;
        if colon {
            sink.write_char(':')?;
        }
        self.write_number(sink, minutes % 60, 2)
    }
}

impl Writeable for FormattedInstant<'_> {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let time = self.wall.time;
        for token in self.pattern.tokens() {
            match *token {
                Token::Literal(text) => sink.write_str(text)?,
                Token::Year { two_digit, calendar } => {
                    let year = i64::from(self.fields(calendar).year);
                    if two_digit {
                        self.write_number(sink, year.rem_euclid(100), 2)?;
                    } else {
                        self.write_number(sink, year, 4)?;
                    }
                }
                Token::Month { padded, calendar } => {
                    let month = i64::from(self.fields(calendar).month) + 1;
                    self.write_number(sink, month, if padded { 2 } else { 1 })?;
                }
                Token::MonthName { style, calendar } => {
                    let metadata = self.metadata(calendar);
                    let names = match style {
                        NameStyle::Long => &metadata.months,
                        NameStyle::Short | NameStyle::Narrow => &metadata.months_short,
                    };
                    let month = usize::from(self.fields(calendar).month);
                    sink.write_str(names.get(month).map_or("", String::as_str))?;
                }
                Token::Day { padded, calendar } => {
                    let day = i64::from(self.fields(calendar).day);
                    self.write_number(sink, day, if padded { 2 } else { 1 })?;
                }
                Token::Weekday => {
                    self.write_number(sink, i64::from(self.wall.date.day_of_week()), 1)?;
                }
                Token::WeekdayName(style) => {
                    let names = match style {
                        NameStyle::Long => &self.active_metadata.weekdays,
                        NameStyle::Short => &self.active_metadata.weekdays_short,
                        NameStyle::Narrow => &self.active_metadata.weekdays_min,
                    };
                    let weekday = usize::from(self.wall.date.day_of_week());
                    sink.write_str(names.get(weekday).map_or("", String::as_str))?;
                }
                Token::Hour {
                    padded,
                    twelve_hour,
                } => {
                    let mut hour = time.hour;
                    if twelve_hour {
                        hour %= 12;
                        if hour == 0 {
                            hour = 12;
                        }
                    }
                    self.write_number(sink, i64::from(hour), if padded { 2 } else { 1 })?;
                }
                Token::Minute { padded } => {
                    self.write_number(sink, i64::from(time.minute), if padded { 2 } else { 1 })?;
                }
                Token::Second { padded } => {
                    self.write_number(sink, i64::from(time.second), if padded { 2 } else { 1 })?;
                }
                Token::Millisecond => self.write_number(sink, i64::from(time.millisecond), 3)?,
                Token::Meridiem { uppercase } => {
                    let label = &self.active_metadata.meridiem[usize::from(time.hour >= 12)];
                    if uppercase {
                        sink.write_str(label)?;
                    } else {
                        for ch in label.chars() {
                            sink.write_char(ch.to_ascii_lowercase())?;
                        }
                    }
                }
                Token::Offset { colon } => self.write_offset(sink, colon)?,
                Token::UtcDesignator => {
                    if self.utc {
                        sink.write_char('Z')?;
                    } else {
                        self.write_offset(sink, true)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::at_least(self.pattern.tokens().len())
    }
}

impl_display_with_writeable!(FormattedInstant<'_>);

fn write_number<W: Write + ?Sized>(
    sink: &mut W,
    value: i64,
    width: usize,
    digits: Digits,
) -> fmt::Result {
    if value < 0 {
        sink.write_char('-')?;
    }
    let mut buffer = [0u8; 20];
    let mut remaining = value.unsigned_abs();
    let mut len = 0;
    loop {
        buffer[len] = (remaining % 10) as u8;
        remaining /= 10;
        len += 1;
        if remaining == 0 {
            break;
        }
    }
    for _ in len..width {
        sink.write_char(digits.digit(0))?;
    }
    for digit in buffer[..len].iter().rev() {
        sink.write_char(digits.digit(*digit))?;
    }
    Ok(())
}

// ==== Parsing ====

/// Fields read from an input string. Missing fields are `None`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedFields {
    pub(crate) year: Option<i32>,
    /// Zero-based.
    pub(crate) month: Option<i32>,
    pub(crate) day: Option<i32>,
    pub(crate) hour: Option<i32>,
    pub(crate) minute: Option<i32>,
    pub(crate) second: Option<i32>,
    pub(crate) millisecond: Option<i32>,
    pub(crate) post_meridiem: Option<bool>,
    pub(crate) offset_minutes: Option<i16>,
    /// Whether the date fields were read as solar Hijri fields.
    pub(crate) solar_hijri: bool,
}

/// A successful match of one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParseOutcome {
    pub(crate) fields: ParsedFields,
    /// Skipped and leftover input characters plus ten per unmatched token.
    /// Lower is a better match.
    pub(crate) score: usize,
}

/// What a pattern is matched with.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParseContext<'a> {
    pub(crate) strict: bool,
    pub(crate) system: CalendarSystem,
    pub(crate) active_metadata: &'a LocaleMetadata,
    pub(crate) solar_hijri_metadata: &'a LocaleMetadata,
}

impl ParseContext<'_> {
    fn reads_solar_hijri(&self, calendar: FieldCalendar) -> bool {
        calendar == SolarHijri || self.system == CalendarSystem::SolarHijri
    }

    fn metadata(&self, calendar: FieldCalendar) -> &LocaleMetadata {
        match calendar {
            Active => self.active_metadata,
            SolarHijri => self.solar_hijri_metadata,
        }
    }
}

/// Replaces the digits of `digits`, and any Persian or Arabic-Indic digit,
/// with ASCII digits.
pub(crate) fn normalize_digits(input: &str, digits: Digits) -> String {
    input
        .chars()
        .map(|ch| match digits.value_of(ch) {
            Some(value) => char::from(b'0' + value),
            None => ch,
        })
        .collect()
}

struct Cursor<'i> {
    rest: &'i str,
    skipped: usize,
}

impl Cursor<'_> {
    fn advance(&mut self, bytes: usize) {
        self.rest = &self.rest[bytes..];
    }

    fn skip(&mut self, bytes: usize) {
        self.skipped += self.rest[..bytes].chars().count();
        self.advance(bytes);
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest.len() - self.rest.trim_start().len();
        self.skip(trimmed);
    }

    /// Reads between `min` and `max` ASCII digits. Forgiving reads first
    /// skip anything that is not a digit.
    fn number(&mut self, min: usize, max: usize, strict: bool) -> Option<(i32, usize)> {
        if !strict {
            let start = self.rest.find(|c: char| c.is_ascii_digit())?;
            self.skip(start);
        }
        let len = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if len < min {
            return None;
        }
        let value = self.rest[..len].parse::<i32>().ok()?;
        self.advance(len);
        Some((value, len))
    }

    /// Reads the longest case-insensitive match among `lists`, returning its
    /// index within its list.
    fn name(&mut self, lists: &[&[String]], strict: bool) -> Option<usize> {
        if !strict {
            self.skip_whitespace();
        }
        let mut best: Option<(usize, usize)> = None;
        for list in lists {
            for (index, name) in list.iter().enumerate() {
                let Some(len) = prefix_len_ignoring_case(self.rest, name) else {
                    continue;
                };
                if best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((index, len));
                }
            }
        }
        let (index, len) = best?;
        self.advance(len);
        Some(index)
    }

    /// Reads `Z`, `±HH:MM` or `±HHMM` as minutes east of UTC.
    fn offset(&mut self, strict: bool) -> Option<i16> {
        if !strict {
            self.skip_whitespace();
        }
        if let Some(rest) = self.rest.strip_prefix(['Z', 'z']) {
            self.rest = rest;
            return Some(0);
        }
        let sign = match self.rest.as_bytes().first()? {
            b'+' => 1,
            b'-' => -1,
            _ => return None,
        };
        let mut lookahead = Cursor {
            rest: &self.rest[1..],
            skipped: 0,
        };
        let (hours, _) = lookahead.number(2, 2, true)?;
        if let Some(rest) = lookahead.rest.strip_prefix(':') {
            lookahead.rest = rest;
        }
        let (minutes, _) = lookahead.number(2, 2, true)?;
        if hours > 23 || minutes > 59 {
            return None;
        }
        self.rest = lookahead.rest;
        Some(sign * (hours * 60 + minutes) as i16)
    }
}

fn prefix_len_ignoring_case(input: &str, name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    let mut input_chars = input.char_indices();
    for expected in name.chars() {
        let (_, actual) = input_chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(input_chars.next().map_or(input.len(), |(index, _)| index))
}

fn expand_two_digit_year(year: i32, solar_hijri: bool) -> i32 {
    match (solar_hijri, year) {
        (true, y) if y > 47 => 1300 + y,
        (true, y) => 1400 + y,
        (false, y) if y > 68 => 1900 + y,
        (false, y) => 2000 + y,
    }
}

/// Matches `input`, whose digits must already be ASCII, against `pattern`.
///
/// Strict matching requires every literal, the exact width of every
/// numeric token and the whole input. Forgiving matching skips unmatched
/// literals and tokens and ignores leftover input, but at least one token
/// has to match.
pub(crate) fn parse_with_pattern(
    input: &str,
    pattern: &FormatPattern<'_>,
    context: &ParseContext,
) -> Option<ParseOutcome> {
    let strict = context.strict;
    let mut cursor = Cursor {
        rest: input,
        skipped: 0,
    };
    let mut fields = ParsedFields::default();
    let mut matched = 0usize;
    let mut unmatched = 0usize;

    for token in pattern.tokens() {
        if let Token::Literal(text) = *token {
            match cursor.rest.strip_prefix(text) {
                Some(rest) => cursor.rest = rest,
                None if strict => return None,
                None => {}
            }
            continue;
        }

        let read = match *token {
            Token::Year { two_digit, calendar } => {
                let solar_hijri = context.reads_solar_hijri(calendar);
                fields.solar_hijri |= solar_hijri;
                let read = if two_digit {
                    cursor.number(if strict { 2 } else { 1 }, 2, strict)
                } else {
                    cursor.number(if strict { 4 } else { 1 }, 4, strict)
                };
                read.map(|(year, len)| {
                    fields.year = Some(if two_digit && len <= 2 {
                        expand_two_digit_year(year, solar_hijri)
                    } else {
                        year
                    });
                })
            }
            Token::Month { padded, calendar } => {
                fields.solar_hijri |= context.reads_solar_hijri(calendar);
                cursor
                    .number(width_min(padded, strict), 2, strict)
                    .map(|(month, _)| fields.month = Some(month - 1))
            }
            Token::MonthName { style, calendar } => {
                fields.solar_hijri |= context.reads_solar_hijri(calendar);
                let metadata = context.metadata(calendar);
                let names: [&[String]; 2] = [&metadata.months, &metadata.months_short];
                let lists = match (strict, style) {
                    (true, NameStyle::Long) => &names[..1],
                    (true, _) => &names[1..],
                    (false, _) => &names[..],
                };
                cursor
                    .name(lists, strict)
                    .map(|month| fields.month = Some(month as i32))
            }
            Token::Day { padded, calendar } => {
                fields.solar_hijri |= context.reads_solar_hijri(calendar);
                cursor
                    .number(width_min(padded, strict), 2, strict)
                    .map(|(day, _)| fields.day = Some(day))
            }
            Token::Weekday => cursor.number(1, 1, strict).map(|_| ()),
            Token::WeekdayName(style) => {
                let metadata = context.active_metadata;
                let names: [&[String]; 3] = [
                    &metadata.weekdays,
                    &metadata.weekdays_short,
                    &metadata.weekdays_min,
                ];
                let lists = match (strict, style) {
                    (true, NameStyle::Long) => &names[..1],
                    (true, NameStyle::Short) => &names[1..2],
                    (true, NameStyle::Narrow) => &names[2..],
                    (false, _) => &names[..],
                };
                cursor.name(lists, strict).map(|_| ())
            }
            Token::Hour { padded, .. } => cursor
                .number(width_min(padded, strict), 2, strict)
                .map(|(hour, _)| fields.hour = Some(hour)),
            Token::Minute { padded } => cursor
                .number(width_min(padded, strict), 2, strict)
                .map(|(minute, _)| fields.minute = Some(minute)),
            Token::Second { padded } => cursor
                .number(width_min(padded, strict), 2, strict)
                .map(|(second, _)| fields.second = Some(second)),
            Token::Millisecond => {
                cursor
                    .number(if strict { 3 } else { 1 }, 3, strict)
                    .map(|(value, len)| {
                        let scale = match len {
                            1 => 100,
                            2 => 10,
                            _ => 1,
                        };
                        fields.millisecond = Some(value * scale);
                    })
            }
            Token::Meridiem { .. } => {
                let latin = [String::from("am"), String::from("pm")];
                let lists: [&[String]; 2] = [&context.active_metadata.meridiem, &latin];
                cursor
                    .name(&lists, strict)
                    .map(|index| fields.post_meridiem = Some(index == 1))
            }
            Token::Offset { .. } | Token::UtcDesignator => cursor
                .offset(strict)
                .map(|offset| fields.offset_minutes = Some(offset)),
            Token::Literal(_) => Some(()),
        };

        match read {
            Some(()) => matched += 1,
            None if strict => return None,
            None => unmatched += 1,
        }
    }

    if strict && !cursor.rest.is_empty() {
        return None;
    }
    if matched == 0 {
        return None;
    }
    Some(ParseOutcome {
        fields,
        score: cursor.skipped + cursor.rest.chars().count() + unmatched * 10,
    })
}

fn width_min(padded: bool, strict: bool) -> usize {
    if padded && strict {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        iso::{IsoDate, IsoTime},
        locale::LocaleTag,
    };

    struct Names {
        system: CalendarSystem,
        active: LocaleMetadata,
        solar_hijri: LocaleMetadata,
    }

    impl Names {
        fn load(language: &str, system: CalendarSystem) -> Self {
            let tag = LocaleTag::new(language);
            Self {
                system,
                active: LocaleMetadata::try_new(&tag, system).unwrap(),
                solar_hijri: LocaleMetadata::try_new(&tag, CalendarSystem::SolarHijri).unwrap(),
            }
        }

        fn context(&self, strict: bool) -> ParseContext<'_> {
            ParseContext {
                strict,
                system: self.system,
                active_metadata: &self.active,
                solar_hijri_metadata: &self.solar_hijri,
            }
        }
    }

    #[test]
    fn tokenizes_longest_first() {
        let pattern = FormatPattern::parse("jYYYY/jMM/jDD");
        assert_eq!(
            pattern.tokens(),
            &[
                Token::Year { two_digit: false, calendar: SolarHijri },
                Token::Literal("/"),
                Token::Month { padded: true, calendar: SolarHijri },
                Token::Literal("/"),
                Token::Day { padded: true, calendar: SolarHijri },
            ]
        );
        let pattern = FormatPattern::parse("MMMM Do");
        assert_eq!(
            pattern.tokens(),
            &[
                Token::MonthName { style: NameStyle::Long, calendar: Active },
                Token::Literal(" "),
                Token::Day { padded: false, calendar: Active },
                Token::Literal("o"),
            ]
        );
    }

    #[test]
    fn brackets_escape_tokens() {
        let pattern = FormatPattern::parse("[Today is] dddd");
        assert_eq!(
            pattern.tokens(),
            &[
                Token::Literal("Today is"),
                Token::Literal(" "),
                Token::WeekdayName(NameStyle::Long),
            ]
        );
        assert_eq!(
            FormatPattern::parse("[unterminated").tokens(),
            &[Token::Literal("[unterminated")]
        );
        assert!(FormatPattern::parse("").is_empty());
    }

    fn formatted(pattern: &FormatPattern<'_>, language: &str, system: CalendarSystem) -> String {
        // 1 Farvardin 1403, 2024-03-20, a Wednesday.
        let wall = IsoDateTime::new_unchecked(
            IsoDate::new_unchecked(2024, 3, 20),
            IsoTime::new_unchecked(14, 5, 9, 7),
        );
        let solar_hijri = CalendarFields::new(1403, 0, 1);
        let active = match system {
            CalendarSystem::SolarHijri => solar_hijri,
            CalendarSystem::Gregorian => CalendarFields::new(2024, 2, 20),
        };
        let names = Names::load(language, system);
        FormattedInstant {
            pattern,
            wall,
            offset_minutes: 210,
            utc: false,
            active,
            active_metadata: &names.active,
            solar_hijri,
            solar_hijri_metadata: &names.solar_hijri,
            digits: names.active.digits,
        }
        .to_string()
    }

    #[test]
    fn formats_both_calendars() {
        let pattern = FormatPattern::parse("YYYY-MM-DD jYYYY/jM/jD HH:mm:ss.SSS ZZ");
        assert_eq!(
            formatted(&pattern, "en", CalendarSystem::Gregorian),
            "2024-03-20 1403/1/1 14:05:09.007 +0330"
        );
        let pattern = FormatPattern::parse("dddd, MMMM D YYYY h:mm a");
        assert_eq!(
            formatted(&pattern, "en", CalendarSystem::Gregorian),
            "Wednesday, March 20 2024 2:05 pm"
        );
        assert_eq!(
            formatted(&pattern, "en", CalendarSystem::SolarHijri),
            "Wednesday, Farvardin 1 1403 2:05 pm"
        );
    }

    #[test]
    fn persian_locale_formats_persian_digits() {
        let pattern = FormatPattern::parse("D");
        assert_eq!(formatted(&pattern, "fa", CalendarSystem::SolarHijri), "۱");
        let pattern = FormatPattern::parse("YY");
        assert_eq!(formatted(&pattern, "fa", CalendarSystem::SolarHijri), "۰۳");
    }

    #[test]
    fn iso_pattern_writes_offset() {
        assert_eq!(
            formatted(&FormatPattern::iso8601(), "fa", CalendarSystem::Gregorian),
            "۲۰۲۴-۰۳-۲۰T۱۴:۰۵:۰۹+۰۳:۳۰"
        );
    }

    #[test]
    fn strict_parsing_requires_exact_input() {
        let pattern = FormatPattern::parse("YYYY-MM-DD");
        let names = Names::load("en", CalendarSystem::Gregorian);
        let strict = names.context(true);
        let outcome = parse_with_pattern("2024-03-20", &pattern, &strict).unwrap();
        assert_eq!(outcome.fields.year, Some(2024));
        assert_eq!(outcome.fields.month, Some(2));
        assert_eq!(outcome.fields.day, Some(20));
        assert_eq!(outcome.score, 0);

        assert!(parse_with_pattern("2024-3-20", &pattern, &strict).is_none());
        assert!(parse_with_pattern("2024-03-20 extra", &pattern, &strict).is_none());
        assert!(parse_with_pattern("not-a-date", &pattern, &strict).is_none());
    }

    #[test]
    fn forgiving_parsing_skips_separators() {
        let pattern = FormatPattern::parse("YYYY-MM-DD");
        let names = Names::load("en", CalendarSystem::Gregorian);
        let forgiving = names.context(false);
        let outcome = parse_with_pattern("2024/3/20", &pattern, &forgiving).unwrap();
        assert_eq!(outcome.fields.year, Some(2024));
        assert_eq!(outcome.fields.month, Some(2));
        assert_eq!(outcome.fields.day, Some(20));
        assert!(!outcome.fields.solar_hijri);

        let outcome = parse_with_pattern("2024", &pattern, &forgiving).unwrap();
        assert_eq!(outcome.fields.month, None);
        assert_eq!(outcome.score, 20);

        assert!(parse_with_pattern("not-a-date", &pattern, &forgiving).is_none());
    }

    #[test]
    fn parses_names_and_meridiem() {
        let pattern = FormatPattern::parse("D MMMM YYYY h:mm A");
        let names = Names::load("en", CalendarSystem::SolarHijri);
        let forgiving = names.context(false);
        let input = normalize_digits("۱ farvardin ۱۴۰۳ 2:30 PM", Digits::LATIN);
        let fields = parse_with_pattern(&input, &pattern, &forgiving).unwrap().fields;
        assert_eq!(fields.month, Some(0));
        assert_eq!(fields.year, Some(1403));
        assert_eq!(fields.hour, Some(2));
        assert_eq!(fields.post_meridiem, Some(true));
        assert!(fields.solar_hijri);
    }

    #[test]
    fn parses_offsets() {
        let pattern = FormatPattern::parse("YYYY-MM-DDTHH:mm:ssZ");
        let names = Names::load("en", CalendarSystem::Gregorian);
        let strict = names.context(true);
        let fields = parse_with_pattern("2024-03-20T10:00:00+03:30", &pattern, &strict)
            .unwrap()
            .fields;
        assert_eq!(fields.offset_minutes, Some(210));
        let fields = parse_with_pattern("2024-03-20T10:00:00Z", &pattern, &strict)
            .unwrap()
            .fields;
        assert_eq!(fields.offset_minutes, Some(0));
    }

    #[test]
    fn two_digit_years_pivot() {
        assert_eq!(expand_two_digit_year(24, false), 2024);
        assert_eq!(expand_two_digit_year(69, false), 1969);
        assert_eq!(expand_two_digit_year(3, true), 1403);
        assert_eq!(expand_two_digit_year(98, true), 1398);
    }
}
