use std::io::BufRead;

/// One of the five measurable quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Bytes,
    Chars,
    Lines,
    MaxLineLength,
    Words,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Metric::Bytes => "Byte count",
            Metric::Chars => "Character count",
            Metric::Lines => "Line count",
            Metric::MaxLineLength => "Max line length",
            Metric::Words => "Word count",
        }
    }
}

/// The metrics requested for one invocation, in display order.
///
/// Insertion order is preserved and duplicates are dropped, so a flag given
/// twice produces one output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSet(Vec<Metric>);

impl MetricSet {
    pub fn new(metrics: impl IntoIterator<Item = Metric>) -> Self {
        let mut inner = Vec::new();

        for metric in metrics {
            if !inner.contains(&metric) {
                inner.push(metric);
            }
        }

        Self(inner)
    }

    /// The triple printed when no metric flags were given:
    /// characters, words, lines, in that order.
    pub fn default_display() -> Self {
        Self(vec![Metric::Chars, Metric::Words, Metric::Lines])
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.0.contains(&metric)
    }

    pub fn iter(&self) -> impl Iterator<Item = Metric> + '_ {
        self.0.iter().copied()
    }
}

/// Accumulator for the running value of each metric.
///
/// Fields for metrics outside the requested set stay zero and must not be
/// displayed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counts {
    pub bytes: u64,
    pub chars: u64,
    pub lines: u64,
    pub max_line_length: u64,
    pub words: u64,
}

impl Counts {
    pub fn get(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Bytes => self.bytes,
            Metric::Chars => self.chars,
            Metric::Lines => self.lines,
            Metric::MaxLineLength => self.max_line_length,
            Metric::Words => self.words,
        }
    }
}

/// Scan the stream once, line by line, accumulating the requested metrics.
///
/// A line is the span up to and including the next `\n`. Byte length and max
/// line length include the newline byte. A final fragment with no trailing
/// newline counts toward no metric, and a read error mid-stream ends the
/// scan without surfacing a failure.
pub fn count<R: BufRead>(mut reader: R, metrics: &MetricSet) -> Counts {
    let mut counts = Counts::default();
    let mut buffer = String::new();

    loop {
        buffer.clear();

        match reader.read_line(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        if !buffer.ends_with('\n') {
            break;
        }

        if metrics.contains(Metric::Bytes) {
            counts.bytes += buffer.len() as u64;
        }

        if metrics.contains(Metric::Chars) {
            counts.chars += buffer.chars().count() as u64;
        }

        if metrics.contains(Metric::Lines) {
            counts.lines += 1;
        }

        if metrics.contains(Metric::MaxLineLength) {
            counts.max_line_length = counts.max_line_length.max(buffer.len() as u64);
        }

        if metrics.contains(Metric::Words) {
            counts.words += buffer.split_whitespace().count() as u64;
        }
    }

    counts
}

/// Map the requested metrics to labeled values, in display order.
pub fn report<'a>(
    counts: &'a Counts,
    metrics: &'a MetricSet,
) -> impl Iterator<Item = (&'static str, u64)> + 'a {
    metrics.iter().map(|metric| (metric.label(), counts.get(metric)))
}
