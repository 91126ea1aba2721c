use serde::de::{self, Deserialize, Deserializer, Unexpected};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Class of a point in the classification dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Zero,
    One,
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            0 => Ok(Label::Zero),
            1 => Ok(Label::One),
            other => Err(de::Error::invalid_value(
                Unexpected::Unsigned(other as u64),
                &"zero or one",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledPoint {
    pub point: Point,
    pub label: Label,
}

impl LabeledPoint {
    pub fn new(x: f64, y: f64, label: Label) -> Self {
        Self {
            point: Point::new(x, y),
            label,
        }
    }
}
