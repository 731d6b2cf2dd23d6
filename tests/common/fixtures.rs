//! Static line corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative lines.

/// Well-formed lines covering each separator style and pid form.
pub const CORPUS_VALID: &[&str] = &[
    "<15>1987-06-18T18:20:30.337+03:00 server user[42]: Test 123",
    "<15>1987-06-18T15:20:30.337Z server user: Test 123",
    "<15>1987-06-18T15:20:30.337Z server user:Test 123",
    "<15>2014-03-14T03:03:01.337+02:00 server user[42] Test 123",
    "<34>2024-01-15T10:00:00Z mymachine su: 'su root' failed for lonvick on /dev/pts/8",
    "<158>2024-01-15T10:00:01.123456Z web.example.org heroku[router]: at=info method=GET path=\"/\"",
    "<86>2024-01-15T10:00:02-05:00 10.0.0.1 sshd[12345]: Failed password for invalid user admin",
    "<13>2024-01-15T10:00:03+00:00 1080:0:0:0:8:800:200C:417A kernel: ",
    "<191>2024-01-15T10:00:04Z host app[]: empty pid",
    "<0>2024-01-15T10:00:05Z host init[0x]: hex-like pid",
];

/// Lines that must be rejected outright.
pub const CORPUS_REJECTED: &[&str] = &[
    "",
    "<15>",
    "<15>1987-06-18T18:20:30.337+03:00",
    "<15>1987-06-18T18:20:30.337+03:00 server",
    "<15>1987-06-18T18:20:30.337+03:00 server user",
    "<34>Oct 11 22:14:15 mymachine su: 'su root' failed for lonvick on /dev/pts/8",
    "<34>1 2024-01-15T12:00:00Z host sshd 1234 - - Failed password",
    "{\"ts\":\"2024-01-15T10:00:00Z\",\"level\":\"INFO\",\"message\":\"Server started\"}",
    "ts=2024-01-15T10:00:00Z level=info msg=\"Server started\" port=8080",
    "2024-01-15 10:00:00 INFO  Starting application version 2.4.1",
];

/// Header timestamps that match the shape but are not valid calendar times.
pub const CORPUS_INVALID_TIME: &[&str] = &[
    "<15>1987-13-18T15:20:30Z server user: month 13",
    "<15>1987-02-30T15:20:30Z server user: february 30",
    "<15>1987-06-18T15:20:99Z server user: second 99",
    "<15>1-2-3Tnonsense server user: not a time",
    "<15>1987-06-30T23:59:60Z server user: leap second",
    "<15>1987-06-18T24:00:01Z server user: past end of day",
];
