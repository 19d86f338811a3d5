//! Attribute binding: copy the attributes a variant cares about onto a node.

use roxmltree::Node;

use buildlog_model::{NodeData, TreeNode};

use crate::config::{
    ATTR_COMMAND_LINE_ARGUMENTS, ATTR_END_TIME, ATTR_FROM_ASSEMBLY, ATTR_IS_LOW_RELEVANCE,
    ATTR_ITEM_SPEC, ATTR_NAME, ATTR_PROJECT_FILE, ATTR_START_TIME, ATTR_SUCCEEDED,
};
use crate::xml::{get_boolean, get_datetime, get_string};

/// Bind the attributes of `element` that are meaningful for `node`'s variant.
///
/// `IsLowRelevance` is read for every node. Messages and folders take
/// nothing else here; message timestamps are read together with the text
/// once the children are in place.
pub fn bind_attributes(node: &mut TreeNode, element: Node<'_, '_>) {
    node.is_low_relevance = get_boolean(element, ATTR_IS_LOW_RELEVANCE);

    let name = get_string(element, ATTR_NAME).map(str::to_string);
    let start_time = || get_datetime(element, ATTR_START_TIME);
    let end_time = || get_datetime(element, ATTR_END_TIME);
    let string = |attr: &str| get_string(element, attr).map(str::to_string);

    match &mut node.data {
        NodeData::Parameter(parameter) => parameter.name = name,
        NodeData::Property(property) => property.name = name,
        NodeData::Metadata(metadata) => metadata.name = name,
        NodeData::Build(build) => {
            build.succeeded = get_boolean(element, ATTR_SUCCEEDED);
            build.start_time = start_time();
            build.end_time = end_time();
        }
        NodeData::Project(project) => {
            project.name = name;
            project.project_file = string(ATTR_PROJECT_FILE);
            project.start_time = start_time();
            project.end_time = end_time();
        }
        NodeData::Target(target) => {
            target.name = name;
            target.start_time = start_time();
            target.end_time = end_time();
        }
        NodeData::Task(task) => {
            task.name = name;
            task.from_assembly = string(ATTR_FROM_ASSEMBLY);
            task.start_time = start_time();
            task.end_time = end_time();
            task.command_line_arguments = string(ATTR_COMMAND_LINE_ARGUMENTS);
        }
        NodeData::Item(item) => {
            item.name = name;
            item.text = string(ATTR_ITEM_SPEC);
        }
        NodeData::Message(_) | NodeData::Folder(_) => {}
    }
}
