use std::fmt;
use std::ops::{Index, IndexMut};

/// Sampling site category. Exactly these two groups exist; the parser
/// rejects any other label at ingestion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Mine,
    Background,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::Mine, Group::Background];

    pub fn label(self) -> &'static str {
        match self {
            Group::Mine => "mine",
            Group::Background => "background",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four trace elements measured per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Pb,
    As,
    Sb,
    V,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Pb, Element::As, Element::Sb, Element::V];

    /// Dataset column name for the element's concentration field.
    pub fn column(self) -> &'static str {
        match self {
            Element::Pb => "pb_ppm",
            Element::As => "as_ppm",
            Element::Sb => "sb_ppm",
            Element::V => "v_ppm",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Element::Pb => "pb",
            Element::As => "as",
            Element::Sb => "sb",
            Element::V => "v",
        }
    }

    fn index(self) -> usize {
        match self {
            Element::Pb => 0,
            Element::As => 1,
            Element::Sb => 2,
            Element::V => 3,
        }
    }
}

/// One scalar per measured element, indexable by [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementValues([f64; 4]);

impl ElementValues {
    pub fn from_fn(mut f: impl FnMut(Element) -> f64) -> Self {
        let mut out = Self::default();
        for element in Element::ALL {
            out[element] = f(element);
        }
        out
    }
}

impl From<[f64; 4]> for ElementValues {
    fn from(values: [f64; 4]) -> Self {
        ElementValues(values)
    }
}

impl Index<Element> for ElementValues {
    type Output = f64;

    fn index(&self, element: Element) -> &f64 {
        &self.0[element.index()]
    }
}

impl IndexMut<Element> for ElementValues {
    fn index_mut(&mut self, element: Element) -> &mut f64 {
        &mut self.0[element.index()]
    }
}

/// Per-group sample variances of the element concentrations.
pub type Variances = ElementValues;

/// Elementwise mine / background variance ratios (F-distribution statistic).
pub type Ratios = ElementValues;

/// One value per group. Fixed two-field storage keeps the "exactly two
/// groups" invariant out of runtime checks.
#[derive(Debug, Clone, Default)]
pub struct ByGroup<T> {
    pub mine: T,
    pub background: T,
}

impl<T> Index<Group> for ByGroup<T> {
    type Output = T;

    fn index(&self, group: Group) -> &T {
        match group {
            Group::Mine => &self.mine,
            Group::Background => &self.background,
        }
    }
}

impl<T> IndexMut<Group> for ByGroup<T> {
    fn index_mut(&mut self, group: Group) -> &mut T {
        match group {
            Group::Mine => &mut self.mine,
            Group::Background => &mut self.background,
        }
    }
}

/// One measurement record: site code, opaque UTM coordinates, and the four
/// element concentrations. Coordinates are identifiers, not computed
/// quantities, so they stay as text.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub group: Group,
    pub code: String,
    pub x_utm: String,
    pub y_utm: String,
    pub ppm: ElementValues,
}

/// The whole run's mutable aggregate. Built once by the loader, then
/// enriched in place by the variance and ratio passes. Sample order within
/// a group matches input row order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub samples: ByGroup<Vec<Sample>>,
    pub variances: ByGroup<Option<Variances>>,
    pub ratios: Option<Ratios>,
}

impl Dataset {
    pub fn push(&mut self, sample: Sample) {
        self.samples[sample.group].push(sample);
    }

    pub fn n_samples(&self) -> usize {
        self.samples.mine.len() + self.samples.background.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_samples() == 0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
