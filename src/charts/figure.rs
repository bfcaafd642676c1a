//! Typed subset of the plotly.js figure schema. Optional fields are left out
//! of the JSON so plotly's own defaults apply.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace(mut self, trace: impl Into<Trace>) -> Self {
        self.data.push(trace.into());
        self
    }

    pub fn push(&mut self, trace: impl Into<Trace>) {
        self.data.push(trace.into());
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(Bar),
    Scatter(Scatter),
    Heatmap(Heatmap),
}

impl From<Bar> for Trace {
    fn from(b: Bar) -> Self {
        Trace::Bar(b)
    }
}

impl From<Scatter> for Trace {
    fn from(s: Scatter) -> Self {
        Trace::Scatter(s)
    }
}

impl From<Heatmap> for Trace {
    fn from(h: Heatmap) -> Self {
        Trace::Heatmap(h)
    }
}

/// Coordinates for one axis: numbers or category labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

impl Values {
    pub fn numbers<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        Values::Numbers(iter.into_iter().map(Into::into).collect())
    }

    pub fn counts<'a, I>(iter: I) -> Self
    where
        I: IntoIterator<Item = &'a u64>,
    {
        Values::Numbers(iter.into_iter().map(|&c| c as f64).collect())
    }

    pub fn labels<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Values::Labels(iter.into_iter().map(Into::into).collect())
    }
}

/// One value shared by all points, or one per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl From<&str> for OneOrMany<String> {
    fn from(s: &str) -> Self {
        OneOrMany::One(s.to_string())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(s: String) -> Self {
        OneOrMany::One(s)
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(v: Vec<String>) -> Self {
        OneOrMany::Many(v)
    }
}

/// A single position or coordinate that may be numeric or categorical.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coord {
    Number(f64),
    Label(String),
}

impl From<f64> for Coord {
    fn from(v: f64) -> Self {
        Coord::Number(v)
    }
}

impl From<&str> for Coord {
    fn from(s: &str) -> Self {
        Coord::Label(s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<OneOrMany<String>>,
}

impl Font {
    pub fn size(size: f64) -> Self {
        Self { size: Some(size), ..Default::default() }
    }

    pub fn sized(size: f64, color: impl Into<OneOrMany<String>>) -> Self {
        Self { size: Some(size), color: Some(color.into()), ..Default::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl Marker {
    pub fn color(color: impl Into<OneOrMany<String>>) -> Self {
        Self { color: Some(color.into()), size: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub x: Values,
    pub y: Values,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textfont: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
}

impl Bar {
    pub fn new(x: Values, y: Values) -> Self {
        Self {
            x,
            y,
            orientation: None,
            marker: None,
            opacity: None,
            text: None,
            textposition: None,
            textfont: None,
            hovertemplate: None,
            xaxis: None,
            yaxis: None,
        }
    }

    /// Horizontal bars: `x` carries the values and `y` the categories.
    pub fn horizontal(x: Values, y: Values) -> Self {
        Self { orientation: Some("h".to_string()), ..Self::new(x, y) }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Scatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Values>,
    pub y: Values,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textfont: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
}

impl Scatter {
    pub fn new(y: Values, mode: &str) -> Self {
        Self {
            x: None,
            y,
            mode: mode.to_string(),
            line: None,
            marker: None,
            text: None,
            textposition: None,
            textfont: None,
            hoverinfo: None,
            hovertemplate: None,
            xaxis: None,
            yaxis: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Heatmap {
    /// Row-major cells; `None` renders as a gap.
    pub z: Vec<Vec<Option<f64>>>,
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub colorscale: Vec<(f64, String)>,
    pub showscale: bool,
    pub text: Vec<Vec<String>>,
    pub texttemplate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textfont: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Margin {
    pub fn uniform(m: u32) -> Self {
        Self { l: m, r: m, t: m, b: m }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridwidth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linewidth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linecolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickfont: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl Axis {
    pub fn hidden() -> Self {
        Self { visible: Some(false), ..Default::default() }
    }

    pub fn titled(text: &str) -> Self {
        Self {
            title: Some(Title { text: text.to_string(), ..Default::default() }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: Coord,
    pub y: Coord,
    pub text: String,
    pub showarrow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Annotation {
    pub fn text_at(x: impl Into<Coord>, y: impl Into<Coord>, text: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            text: text.into(),
            showarrow: false,
            xref: None,
            yref: None,
            xanchor: None,
            yanchor: None,
            font: None,
        }
    }
}

/// A straight reference line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: String,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub xref: String,
    pub yref: String,
    pub line: Line,
}

impl Shape {
    pub fn vertical(x: f64, xref: &str, line: Line) -> Self {
        Self {
            kind: "line".to_string(),
            x0: x,
            x1: x,
            y0: 0.0,
            y1: 1.0,
            xref: xref.to_string(),
            yref: "paper".to_string(),
            line,
        }
    }

    pub fn horizontal(y: f64, yref: &str, line: Line) -> Self {
        Self {
            kind: "line".to_string(),
            x0: 0.0,
            x1: 1.0,
            y0: y,
            y1: y,
            xref: "paper".to_string(),
            yref: yref.to_string(),
            line,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis2: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn traces_carry_their_type_tag() {
        let fig = Figure::new().with_trace(Bar::horizontal(
            Values::numbers([3.0, 4.0]),
            Values::labels(["a", "b"]),
        ));
        let v = serde_json::to_value(&fig).unwrap();
        assert_eq!(v["data"][0]["type"], "bar");
        assert_eq!(v["data"][0]["orientation"], "h");
        assert_eq!(v["data"][0]["y"], json!(["a", "b"]));
        assert!(v["data"][0].get("marker").is_none());
    }

    #[test]
    fn empty_layout_serializes_to_empty_object() {
        let v = serde_json::to_value(Layout::default()).unwrap();
        assert_eq!(v, json!({}));
    }

    #[test]
    fn heatmap_gaps_are_null() {
        let h = Heatmap {
            z: vec![vec![Some(1.0), None]],
            x: vec!["Mon".into(), "Tue".into()],
            y: vec!["Week 1".into()],
            colorscale: vec![(0.0, "#fff".into()), (1.0, "#000".into())],
            showscale: false,
            text: vec![vec!["1".into(), String::new()]],
            texttemplate: "%{text}".into(),
            textfont: None,
            hovertemplate: None,
        };
        let v = serde_json::to_value(Trace::from(h)).unwrap();
        assert_eq!(v["type"], "heatmap");
        assert_eq!(v["z"], json!([[1.0, null]]));
        assert_eq!(v["colorscale"], json!([[0.0, "#fff"], [1.0, "#000"]]));
    }
}
