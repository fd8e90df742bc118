mod element;

pub use element::{Channel, Element, ElementClass, ElementId, Geometry, SymbolShape};

use tracing::trace;

use crate::core::PointPx;
use crate::error::{StoryError, StoryResult};
use crate::render::Color;

/// Retained store of every authored visual element.
///
/// Ids are dense insertion indices; elements are never removed, steps
/// hide them by driving opacity to zero instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mut element: Element) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        element.id = id;
        trace!(
            id = id.raw(),
            class = ?element.class(),
            tag = element.tag(),
            "scene element inserted"
        );
        self.elements.push(element);
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> StoryResult<&Element> {
        self.elements
            .get(id.index())
            .ok_or(StoryError::UnknownElement { element: id.raw() })
    }

    pub fn get_mut(&mut self, id: ElementId) -> StoryResult<&mut Element> {
        self.elements
            .get_mut(id.index())
            .ok_or(StoryError::UnknownElement { element: id.raw() })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Ids of every element of `class`, in insertion order.
    #[must_use]
    pub fn select(&self, class: ElementClass) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|element| element.class() == class)
            .map(Element::id)
            .collect()
    }

    /// Ids of every element of `class` carrying `tag`.
    #[must_use]
    pub fn select_tagged(&self, class: ElementClass, tag: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|element| element.class() == class && element.tag() == Some(tag))
            .map(Element::id)
            .collect()
    }

    /// First element of `class`, for singleton groups.
    #[must_use]
    pub fn select_one(&self, class: ElementClass) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|element| element.class() == class)
            .map(Element::id)
    }

    pub fn scalar(&self, id: ElementId, channel: Channel) -> StoryResult<f64> {
        let element = self.get(id)?;
        element
            .scalar_channel(channel)
            .ok_or(StoryError::ChannelMismatch {
                element: id.raw(),
                channel: channel.name(),
            })
    }

    pub fn set_scalar(&mut self, id: ElementId, channel: Channel, value: f64) -> StoryResult<()> {
        let element = self.get_mut(id)?;
        match element.scalar_channel_mut(channel) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(StoryError::ChannelMismatch {
                element: id.raw(),
                channel: channel.name(),
            }),
        }
    }

    pub fn color(&self, id: ElementId, channel: Channel) -> StoryResult<Color> {
        let element = self.get(id)?;
        match channel {
            Channel::FillColor => Ok(element.fill),
            Channel::StrokeColor => Ok(element.stroke),
            _ => Err(StoryError::ChannelMismatch {
                element: id.raw(),
                channel: channel.name(),
            }),
        }
    }

    pub fn set_color(&mut self, id: ElementId, channel: Channel, color: Color) -> StoryResult<()> {
        let element = self.get_mut(id)?;
        match channel {
            Channel::FillColor => {
                element.fill = color;
                Ok(())
            }
            Channel::StrokeColor => {
                element.stroke = color;
                Ok(())
            }
            _ => Err(StoryError::ChannelMismatch {
                element: id.raw(),
                channel: channel.name(),
            }),
        }
    }

    pub fn points(&self, id: ElementId) -> StoryResult<&[PointPx]> {
        let element = self.get(id)?;
        match &element.geometry {
            Geometry::Polyline { points, .. } => Ok(points),
            _ => Err(StoryError::ChannelMismatch {
                element: id.raw(),
                channel: Channel::Points.name(),
            }),
        }
    }

    pub fn set_points(&mut self, id: ElementId, replacement: Vec<PointPx>) -> StoryResult<()> {
        let element = self.get_mut(id)?;
        match &mut element.geometry {
            Geometry::Polyline { points, .. } => {
                *points = replacement;
                Ok(())
            }
            _ => Err(StoryError::ChannelMismatch {
                element: id.raw(),
                channel: Channel::Points.name(),
            }),
        }
    }

    /// Replaces the content of a text element, as when a legend is
    /// repurposed between steps.
    pub fn set_text(&mut self, id: ElementId, replacement: impl Into<String>) -> StoryResult<()> {
        let element = self.get_mut(id)?;
        match &mut element.geometry {
            Geometry::Text { text, .. } => {
                *text = replacement.into();
                Ok(())
            }
            _ => Err(StoryError::ChannelMismatch {
                element: id.raw(),
                channel: "text",
            }),
        }
    }
}
