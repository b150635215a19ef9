#![allow(dead_code)]

use std::time::Duration;

use dioxus::dioxus_core::{
    AttributeValue, ElementId, Event, NoOpMutations, Template, VirtualDom, WriteMutations,
};
use dioxus_html::{
    EventData, SerializedHtmlEventConverter, SerializedMouseData, set_event_converter,
};

/// Drive the dom until rerenders, tasks and effects have all been processed.
pub async fn settle(dom: &mut VirtualDom) {
    settle_into(dom, &mut NoOpMutations).await;
}

/// Like [`settle`], but hands every mutation to `to`.
pub async fn settle_into(dom: &mut VirtualDom, to: &mut impl WriteMutations) {
    for _ in 0..8 {
        let _ = tokio::time::timeout(Duration::from_millis(10), dom.wait_for_work()).await;
        dom.render_immediate(to);
    }
}

/// Build the dom, settle it, and return the rendered html.
pub async fn rebuild_and_render(dom: &mut VirtualDom) -> String {
    dom.rebuild(&mut NoOpMutations);
    settle(dom).await;
    dioxus_ssr::render(dom)
}

pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Fire a click on `id` the way a renderer would.
pub fn click(dom: &mut VirtualDom, id: ElementId) {
    set_event_converter(Box::new(SerializedHtmlEventConverter));
    let event = Event::new(
        EventData::Mouse(SerializedMouseData::default()).into_any(),
        true,
    );
    dom.runtime().handle_event("click", event, id);
}

/// Keeps track of the elements that currently have a click listener.
#[derive(Default)]
pub struct ClickTargets(Vec<ElementId>);

impl ClickTargets {
    /// The most recently attached click listener.
    pub fn latest(&self) -> ElementId {
        *self.0.last().expect("no click listener has been attached")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl WriteMutations for ClickTargets {
    fn append_children(&mut self, _: ElementId, _: usize) {}

    fn assign_node_id(&mut self, _: &'static [u8], _: ElementId) {}

    fn create_placeholder(&mut self, _: ElementId) {}

    fn create_text_node(&mut self, _: &str, _: ElementId) {}

    fn load_template(&mut self, _: Template, _: usize, _: ElementId) {}

    fn replace_node_with(&mut self, _: ElementId, _: usize) {}

    fn replace_placeholder_with_nodes(&mut self, _: &'static [u8], _: usize) {}

    fn insert_nodes_after(&mut self, _: ElementId, _: usize) {}

    fn insert_nodes_before(&mut self, _: ElementId, _: usize) {}

    fn set_attribute(
        &mut self,
        _: &'static str,
        _: Option<&'static str>,
        _: &AttributeValue,
        _: ElementId,
    ) {
    }

    fn set_node_text(&mut self, _: &str, _: ElementId) {}

    fn create_event_listener(&mut self, name: &'static str, id: ElementId) {
        if name.trim_start_matches("on") == "click" {
            self.0.push(id);
        }
    }

    fn remove_event_listener(&mut self, name: &'static str, id: ElementId) {
        if name.trim_start_matches("on") == "click" {
            self.0.retain(|target| *target != id);
        }
    }

    fn remove_node(&mut self, id: ElementId) {
        self.0.retain(|target| *target != id);
    }

    fn push_root(&mut self, _: ElementId) {}
}
