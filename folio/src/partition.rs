//! Splitting a photo's combined style declarations between its two layers.
//!
//! A photo is rendered as an outer *frame* (which owns the layout box: margin, padding, size,
//! overflow) around an *image* (which owns everything visual). Callers describe the photo with
//! one combined set of utility classes and motion props; [`partition`] routes each declaration
//! to the layer it belongs to.
//!
//! Precedence per declaration: explicit per-target overrides, then prefix classification, then
//! the frame as the default bucket. The result is ordered and deterministic.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Animated property name → value (`"marginLeft" → "1rem"`).
pub type Keyframes = BTreeMap<String, String>;

/// Prop name → value.
pub type Props = BTreeMap<String, PropValue>;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PropValue {
    Bool(bool),
    Text(String),
    Keyframes(Keyframes),
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Keyframes> for PropValue {
    fn from(v: Keyframes) -> Self {
        Self::Keyframes(v)
    }
}

/// The layer a declaration is routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Image,
    Frame,
}

/// How a top-level prop is routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropRoute {
    Image,
    Frame,
    /// Copied to both layers.
    Both,
    /// A keyframe object split key by key.
    Split,
}

/// Motion props whose values are keyframe objects.
pub const KEYFRAME_PROPS: &[&str] = &[
    "animate",
    "initial",
    "whileHover",
    "whileTap",
    "whileInView",
    "viewport",
    "exit",
];

const SPACING_PREFIXES: &[&str] = &[
    "m-", "p-", "mx-", "my-", "mt-", "mb-", "ml-", "mr-", "px-", "py-", "pt-", "pb-", "pl-", "pr-",
];

const SIZE_PREFIXES: &[&str] = &["w-", "h-", "max-w-", "max-h-", "min-w-", "min-h-", "size-"];

const OVERFLOW_PREFIX: &str = "overflow-";

const FRAME_KEYFRAME_PREFIXES: &[&str] = &["margin", "padding", "width"];

/// Strips responsive/state variants: `md:hover:mx-4` → `mx-4`.
fn base_class(class: &str) -> &str {
    class.rsplit(':').next().unwrap_or(class)
}

/// The text before the first `-`, used to match overrides against auto classes.
fn indicator(class: &str) -> &str {
    class.split('-').next().unwrap_or(class)
}

pub fn classify_class(class: &str) -> Target {
    let base = base_class(class);
    let frame = SPACING_PREFIXES.iter().any(|p| base.starts_with(p))
        || SIZE_PREFIXES.iter().any(|p| base.starts_with(p))
        || base.starts_with(OVERFLOW_PREFIX);
    if frame { Target::Frame } else { Target::Image }
}

pub fn classify_keyframe_key(key: &str) -> Target {
    if FRAME_KEYFRAME_PREFIXES.iter().any(|p| key.starts_with(p)) {
        Target::Frame
    } else {
        Target::Image
    }
}

pub fn route_prop(key: &str, value: &PropValue) -> PropRoute {
    match key {
        "transition" => PropRoute::Both,
        "draggable" => PropRoute::Image,
        k if KEYFRAME_PROPS.contains(&k) && matches!(value, PropValue::Keyframes(_)) => {
            PropRoute::Split
        }
        _ => PropRoute::Frame,
    }
}

/// Classes and props destined for one layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleBucket {
    pub classes: Vec<String>,
    pub props: Props,
}

impl StyleBucket {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.props.is_empty()
    }

    /// The classes as a single `class` attribute value.
    pub fn class_list(&self) -> String {
        self.classes.join(" ")
    }
}

/// Combined style input for a photo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhotoStyle {
    /// Classes routed automatically by prefix.
    pub auto_classes: Vec<String>,
    /// Classes forced onto the image; they displace auto classes with the same indicator.
    pub image_classes: Vec<String>,
    /// Classes forced onto the frame; they displace auto classes with the same indicator.
    pub frame_classes: Vec<String>,
    pub auto_props: Props,
    pub image_props: Props,
    pub frame_props: Props,
}

fn split_classes(classes: &str) -> Vec<String> {
    classes.split_whitespace().map(ToString::to_string).collect()
}

impl PhotoStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_classes(mut self, classes: &str) -> Self {
        self.auto_classes = split_classes(classes);
        self
    }

    pub fn with_image_classes(mut self, classes: &str) -> Self {
        self.image_classes = split_classes(classes);
        self
    }

    pub fn with_frame_classes(mut self, classes: &str) -> Self {
        self.frame_classes = split_classes(classes);
        self
    }

    pub fn with_auto_prop(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.auto_props.insert(key.to_string(), value.into());
        self
    }

    pub fn with_image_prop(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.image_props.insert(key.to_string(), value.into());
        self
    }

    pub fn with_frame_prop(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.frame_props.insert(key.to_string(), value.into());
        self
    }
}

/// The two layers' share of a [`PhotoStyle`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    pub image: StyleBucket,
    pub frame: StyleBucket,
}

impl Partition {
    /// Expresses this partition as explicit per-target overrides.
    ///
    /// `partition(&p.to_style()) == p` for any partition `p`.
    pub fn to_style(&self) -> PhotoStyle {
        PhotoStyle {
            auto_classes: Vec::new(),
            image_classes: self.image.classes.clone(),
            frame_classes: self.frame.classes.clone(),
            auto_props: Props::new(),
            image_props: self.image.props.clone(),
            frame_props: self.frame.props.clone(),
        }
    }

    /// Folds both buckets back into auto-routed declarations.
    ///
    /// Keyframe objects present on both layers are merged key by key. For other props the
    /// frame's value wins.
    pub fn merged(&self) -> PhotoStyle {
        let mut auto_classes = self.image.classes.clone();
        auto_classes.extend(self.frame.classes.iter().cloned());

        let mut auto_props = self.image.props.clone();
        for (key, value) in &self.frame.props {
            match (auto_props.get_mut(key), value) {
                (Some(PropValue::Keyframes(into)), PropValue::Keyframes(from)) => {
                    into.extend(from.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
                _ => {
                    auto_props.insert(key.clone(), value.clone());
                }
            }
        }

        PhotoStyle {
            auto_classes,
            auto_props,
            ..PhotoStyle::default()
        }
    }
}

/// Routes every declaration of `style` to the image or the frame.
pub fn partition(style: &PhotoStyle) -> Partition {
    let mut image_auto = Vec::new();
    let mut frame_auto = Vec::new();
    for class in &style.auto_classes {
        match classify_class(class) {
            Target::Image => image_auto.push(class.clone()),
            Target::Frame => frame_auto.push(class.clone()),
        }
    }

    let (mut image_props, mut frame_props) = split_props(&style.auto_props);
    image_props.extend(style.image_props.iter().map(|(k, v)| (k.clone(), v.clone())));
    frame_props.extend(style.frame_props.iter().map(|(k, v)| (k.clone(), v.clone())));

    Partition {
        image: StyleBucket {
            classes: apply_class_overrides(&style.image_classes, image_auto),
            props: image_props,
        },
        frame: StyleBucket {
            classes: apply_class_overrides(&style.frame_classes, frame_auto),
            props: frame_props,
        },
    }
}

fn apply_class_overrides(overrides: &[String], auto: Vec<String>) -> Vec<String> {
    if overrides.is_empty() {
        return auto;
    }
    let indicators: Vec<&str> = overrides.iter().map(|c| indicator(c)).collect();
    let mut out = overrides.to_vec();
    out.extend(auto.into_iter().filter(|c| !indicators.contains(&indicator(c))));
    out
}

fn split_props(props: &Props) -> (Props, Props) {
    let mut image = Props::new();
    let mut frame = Props::new();
    for (key, value) in props {
        match route_prop(key, value) {
            PropRoute::Image => {
                image.insert(key.clone(), value.clone());
            }
            PropRoute::Frame => {
                frame.insert(key.clone(), value.clone());
            }
            PropRoute::Both => {
                image.insert(key.clone(), value.clone());
                frame.insert(key.clone(), value.clone());
            }
            PropRoute::Split => {
                let PropValue::Keyframes(frames) = value else {
                    continue;
                };
                let (to_image, to_frame) = split_keyframes(frames);
                if !to_image.is_empty() {
                    image.insert(key.clone(), PropValue::Keyframes(to_image));
                }
                if !to_frame.is_empty() {
                    frame.insert(key.clone(), PropValue::Keyframes(to_frame));
                }
            }
        }
    }
    (image, frame)
}

fn split_keyframes(frames: &Keyframes) -> (Keyframes, Keyframes) {
    frames
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .partition(|(k, _)| classify_keyframe_key(k) == Target::Image)
}
