//! Per-variant payloads and the `Named`/`Timed` capabilities they share.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::kind::NodeKind;

/// The instant used when a timestamp is absent or cannot be parsed.
#[must_use]
pub fn default_instant() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

/// A node that carries a name.
pub trait Named {
    fn name(&self) -> Option<&str>;
}

/// A node that spans a period of time.
pub trait Timed {
    fn start_time(&self) -> DateTime<Utc>;

    fn end_time(&self) -> DateTime<Utc>;

    /// Elapsed time between start and end.
    ///
    /// Returns `None` when either bound is the default instant or when the
    /// end precedes the start.
    fn duration(&self) -> Option<Duration> {
        let (start, end) = (self.start_time(), self.end_time());
        if start == default_instant() || end == default_instant() || end < start {
            return None;
        }
        Some(end - start)
    }
}

/// Root of a build log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Build {
    pub succeeded: bool,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_file: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Target {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Assembly the task implementation was loaded from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_assembly: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_line_arguments: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// An item, e.g. a file passed to a task. `text` holds the item spec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Property {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

/// Generic container. Elements with no dedicated variant end up here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Folder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Variant payload of a [`TreeNode`](crate::TreeNode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum NodeData {
    Build(Build),
    Project(Project),
    Target(Target),
    Task(Task),
    Item(Item),
    Property(Property),
    Metadata(Metadata),
    Parameter(Parameter),
    Message(Message),
    Folder(Folder),
}

impl NodeData {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Build(_) => NodeKind::Build,
            Self::Project(_) => NodeKind::Project,
            Self::Target(_) => NodeKind::Target,
            Self::Task(_) => NodeKind::Task,
            Self::Item(_) => NodeKind::Item,
            Self::Property(_) => NodeKind::Property,
            Self::Metadata(_) => NodeKind::Metadata,
            Self::Parameter(_) => NodeKind::Parameter,
            Self::Message(_) => NodeKind::Message,
            Self::Folder(_) => NodeKind::Folder,
        }
    }

    /// Name of the payload, if the variant is named.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Project(p) => p.name(),
            Self::Target(t) => t.name(),
            Self::Task(t) => t.name(),
            Self::Item(i) => i.name(),
            Self::Property(p) => p.name(),
            Self::Metadata(m) => m.name(),
            Self::Parameter(p) => p.name(),
            Self::Folder(f) => f.name(),
            Self::Build(_) | Self::Message(_) => None,
        }
    }

    /// The payload viewed as a timed node, if the variant is timed.
    #[must_use]
    pub fn as_timed(&self) -> Option<&dyn Timed> {
        match self {
            Self::Build(b) => Some(b),
            Self::Project(p) => Some(p),
            Self::Target(t) => Some(t),
            Self::Task(t) => Some(t),
            _ => None,
        }
    }
}

macro_rules! impl_named {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Named for $ty {
                fn name(&self) -> Option<&str> {
                    self.name.as_deref()
                }
            }
        )*
    };
}

impl_named!(Project, Target, Task, Item, Property, Metadata, Parameter, Folder);

macro_rules! impl_timed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Timed for $ty {
                fn start_time(&self) -> DateTime<Utc> {
                    self.start_time
                }

                fn end_time(&self) -> DateTime<Utc> {
                    self.end_time
                }
            }
        )*
    };
}

impl_timed!(Build, Project, Target, Task);
