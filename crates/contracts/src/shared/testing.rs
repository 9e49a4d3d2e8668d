//! In-memory page tree and manual clock for unit tests.

use super::scheduler::{Scheduler, TaskId};
use super::surface::{Handler, PageSurface};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    text: String,
    style: HashMap<String, String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRef(usize);

/// Parsed compound selector: optional tag, optional id, any classes
#[derive(Debug, Default)]
struct Simple {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

fn parse_simple(selector: &str) -> Simple {
    let mut out = Simple::default();
    let mut kind = ' ';
    let mut buf = String::new();
    let flush = |kind: char, buf: &mut String, out: &mut Simple| {
        if buf.is_empty() {
            return;
        }
        let token = std::mem::take(buf);
        match kind {
            '#' => out.id = Some(token),
            '.' => out.classes.push(token),
            _ => out.tag = Some(token),
        }
    };
    for ch in selector.trim().chars() {
        if ch == '#' || ch == '.' {
            flush(kind, &mut buf, &mut out);
            kind = ch;
        } else {
            buf.push(ch);
        }
    }
    flush(kind, &mut buf, &mut out);
    out
}

impl Simple {
    fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if &node.tag != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.id.as_ref() != Some(id) {
                return false;
            }
        }
        self.classes.iter().all(|c| node.classes.contains(c))
    }
}

type SharedHandler = Rc<RefCell<Handler>>;

#[derive(Clone)]
pub struct MockSurface {
    nodes: Rc<RefCell<Vec<Node>>>,
    handlers: Rc<RefCell<Vec<(NodeRef, String, SharedHandler)>>>,
}

impl MockSurface {
    pub fn new() -> Self {
        let root = Node {
            tag: "body".to_string(),
            ..Default::default()
        };
        Self {
            nodes: Rc::new(RefCell::new(vec![root])),
            handlers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn root(&self) -> NodeRef {
        NodeRef(0)
    }

    /// Append a child described by a selector-like descriptor, e.g. `div#a-screen.demo-screen`
    pub fn append(&self, parent: NodeRef, descriptor: &str) -> NodeRef {
        let parsed = parse_simple(descriptor);
        let mut nodes = self.nodes.borrow_mut();
        let index = nodes.len();
        nodes.push(Node {
            tag: parsed.tag.unwrap_or_else(|| "div".to_string()),
            id: parsed.id,
            classes: parsed.classes,
            parent: Some(parent.0),
            ..Default::default()
        });
        nodes[parent.0].children.push(index);
        NodeRef(index)
    }

    pub fn append_text(&self, parent: NodeRef, descriptor: &str, text: &str) -> NodeRef {
        let node = self.append(parent, descriptor);
        self.set_text(&node, text);
        node
    }

    pub fn set_attr(&self, element: &NodeRef, name: &str, value: &str) {
        self.nodes.borrow_mut()[element.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn style(&self, element: &NodeRef, property: &str) -> Option<String> {
        self.nodes.borrow()[element.0].style.get(property).cloned()
    }

    pub fn dispatch(&self, element: &NodeRef, event: &str) {
        let matching: Vec<SharedHandler> = self
            .handlers
            .borrow()
            .iter()
            .filter(|(target, name, _)| target == element && name == event)
            .map(|(_, _, h)| h.clone())
            .collect();
        for handler in matching {
            (handler.borrow_mut())();
        }
    }

    pub fn click(&self, element: &NodeRef) {
        self.dispatch(element, "click");
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    fn preorder(&self, from: usize) -> Vec<usize> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack = vec![from];
        while let Some(index) = stack.pop() {
            out.push(index);
            for child in nodes[index].children.iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    fn matching(&self, from: usize, selector: &str, include_self: bool) -> Vec<NodeRef> {
        let parsed = parse_simple(selector);
        let order = self.preorder(from);
        let nodes = self.nodes.borrow();
        order
            .into_iter()
            .filter(|i| include_self || *i != from)
            .filter(|i| parsed.matches(&nodes[*i]))
            .map(NodeRef)
            .collect()
    }
}

impl PageSurface for MockSurface {
    type Element = NodeRef;

    fn query(&self, selector: &str) -> Option<NodeRef> {
        self.matching(0, selector, true).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeRef> {
        self.matching(0, selector, true)
    }

    fn query_within(&self, root: &NodeRef, selector: &str) -> Option<NodeRef> {
        self.matching(root.0, selector, false).into_iter().next()
    }

    fn closest(&self, element: &NodeRef, selector: &str) -> Option<NodeRef> {
        let parsed = parse_simple(selector);
        let nodes = self.nodes.borrow();
        let mut current = Some(element.0);
        while let Some(index) = current {
            if parsed.matches(&nodes[index]) {
                return Some(NodeRef(index));
            }
            current = nodes[index].parent;
        }
        None
    }

    fn children(&self, element: &NodeRef) -> Vec<NodeRef> {
        self.nodes.borrow()[element.0]
            .children
            .iter()
            .map(|i| NodeRef(*i))
            .collect()
    }

    fn attr(&self, element: &NodeRef, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        let node = &nodes[element.0];
        if name == "id" {
            return node.id.clone();
        }
        node.attrs.get(name).cloned()
    }

    fn has_class(&self, element: &NodeRef, class: &str) -> bool {
        self.nodes.borrow()[element.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn add_class(&self, element: &NodeRef, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[element.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, element: &NodeRef, class: &str) {
        self.nodes.borrow_mut()[element.0]
            .classes
            .retain(|c| c != class);
    }

    fn text(&self, element: &NodeRef) -> String {
        self.nodes.borrow()[element.0].text.clone()
    }

    fn set_text(&self, element: &NodeRef, text: &str) {
        self.nodes.borrow_mut()[element.0].text = text.to_string();
    }

    fn set_style(&self, element: &NodeRef, property: &str, value: &str) {
        self.nodes.borrow_mut()[element.0]
            .style
            .insert(property.to_string(), value.to_string());
    }

    fn on(&self, element: &NodeRef, event: &str, handler: Handler) {
        self.handlers.borrow_mut().push((
            *element,
            event.to_string(),
            Rc::new(RefCell::new(handler)),
        ));
    }

    fn off_all(&self) {
        self.handlers.borrow_mut().clear();
    }
}

enum Job {
    Once(Option<Box<dyn FnOnce()>>),
    Every {
        period: u64,
        task: Option<Box<dyn FnMut()>>,
    },
}

struct Entry {
    due: u64,
    job: Job,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    entries: BTreeMap<TaskId, Entry>,
}

/// Scheduler driven by [`ManualScheduler::advance`] instead of real time
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    pub fn pending_count(&self) -> usize {
        self.clock.borrow().entries.len()
    }

    /// Move the clock forward, firing due tasks in due order
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let next = {
                let clock = self.clock.borrow();
                clock
                    .entries
                    .iter()
                    .filter(|(_, e)| e.due <= target)
                    .min_by_key(|(id, e)| (e.due, **id))
                    .map(|(id, e)| (*id, e.due))
            };
            let Some((id, due)) = next else {
                break;
            };
            self.clock.borrow_mut().now = due;
            self.fire(id);
        }
        self.clock.borrow_mut().now = target;
    }

    fn fire(&self, id: TaskId) {
        let taken = {
            let mut clock = self.clock.borrow_mut();
            let is_once = matches!(clock.entries.get(&id).map(|e| &e.job), Some(Job::Once(_)));
            if is_once {
                clock.entries.remove(&id).map(|e| e.job)
            } else {
                clock.entries.get_mut(&id).and_then(|e| match &mut e.job {
                    Job::Every { task, .. } => task.take().map(|t| Job::Every { period: 0, task: Some(t) }),
                    Job::Once(_) => None,
                })
            }
        };
        match taken {
            Some(Job::Once(Some(task))) => task(),
            Some(Job::Every { task: Some(mut task), .. }) => {
                task();
                let mut clock = self.clock.borrow_mut();
                // a task may have cancelled itself while running
                if let Some(entry) = clock.entries.get_mut(&id) {
                    if let Job::Every { period, task: slot } = &mut entry.job {
                        entry.due += (*period).max(1);
                        *slot = Some(task);
                    }
                }
            }
            _ => {}
        }
    }

    fn insert(&self, delay: u64, job: Job) -> TaskId {
        let mut clock = self.clock.borrow_mut();
        clock.next_id += 1;
        let id = TaskId(clock.next_id);
        let due = clock.now + delay;
        clock.entries.insert(id, Entry { due, job });
        id
    }
}

impl Scheduler for ManualScheduler {
    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId {
        self.insert(delay_ms as u64, Job::Once(Some(task)))
    }

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskId {
        self.insert(
            period_ms as u64,
            Job::Every {
                period: period_ms as u64,
                task: Some(task),
            },
        )
    }

    fn cancel(&self, id: TaskId) {
        self.clock.borrow_mut().entries.remove(&id);
    }

    fn is_pending(&self, id: TaskId) -> bool {
        self.clock.borrow().entries.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_selectors() {
        let page = MockSurface::new();
        let root = page.root();
        let screen = page.append(root, "section#menu-screen.demo-screen.active");
        let card = page.append(screen, ".card");
        page.append(card, "span.label");

        assert_eq!(page.query("#menu-screen"), Some(screen));
        assert_eq!(page.query(".demo-screen.active"), Some(screen));
        assert_eq!(page.query("section.card"), None);
        assert!(page.query_within(&card, ".card").is_none());
        assert_eq!(page.closest(&card, ".demo-screen"), Some(screen));
    }

    #[test]
    fn test_manual_clock_runs_due_tasks() {
        let clock = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let repeating = clock.every(100, Box::new(move || h.set(h.get() + 1)));
        let h = hits.clone();
        clock.once(150, Box::new(move || h.set(h.get() + 10)));

        clock.advance(250);
        assert_eq!(hits.get(), 12);
        clock.cancel(repeating);
        clock.advance(1000);
        assert_eq!(hits.get(), 12);
        assert_eq!(clock.pending_count(), 0);
    }
}
