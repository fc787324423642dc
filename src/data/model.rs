// ---------------------------------------------------------------------------
// Measurement – one observation
// ---------------------------------------------------------------------------

/// A single benchmark observation: input size and the two running times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub k: i64,
    /// Trivial algorithm time in seconds.
    pub t1: f64,
    /// KMP algorithm time in seconds.
    pub t2: f64,
}

// ---------------------------------------------------------------------------
// MeasurementTable – the parsed log
// ---------------------------------------------------------------------------

/// Three parallel columns of equal length, in source-file order.
///
/// Built once (via [`FromIterator`]) and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementTable {
    k: Vec<i64>,
    t1: Vec<f64>,
    t2: Vec<f64>,
}

impl MeasurementTable {
    pub fn k(&self) -> &[i64] {
        &self.k
    }

    pub fn t1(&self) -> &[f64] {
        &self.t1
    }

    pub fn t2(&self) -> &[f64] {
        &self.t2
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.k.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.k.is_empty()
    }

    /// Iterate rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = Measurement> + '_ {
        self.k
            .iter()
            .zip(&self.t1)
            .zip(&self.t2)
            .map(|((&k, &t1), &t2)| Measurement { k, t1, t2 })
    }
}

impl FromIterator<Measurement> for MeasurementTable {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        let mut table = MeasurementTable::default();
        for m in iter {
            table.k.push(m.k);
            table.t1.push(m.t1);
            table.t2.push(m.t2);
        }
        table
    }
}
