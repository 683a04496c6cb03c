//! Per-attempt score tracking.
//!
//! Scores live in a side table keyed by `NodeId` instead of on the nodes
//! themselves. Presence in the table is what makes an element a candidate;
//! an element without a record is never compared. A table lives for exactly
//! one attempt, so nothing leaks into a retry.

use std::collections::HashMap;

use dom_query::{NodeId, NodeRef};

use crate::classifier::Classifier;

use super::tags::Tag;

/// Content scores of the candidates found during one attempt.
///
/// Candidates are kept in the order they were first initialized, which is
/// the order ties are broken in.
#[derive(Default)]
pub struct ScoreTable<'a> {
    scores: HashMap<NodeId, f64>,
    candidates: Vec<NodeRef<'a>>,
}

impl<'a> ScoreTable<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the element's score record if it has none.
    ///
    /// The starting value is the tag's base score plus the class weight.
    /// Returns `true` when a record was created.
    pub fn initialize(&mut self, node: &NodeRef<'a>, classifier: &Classifier) -> bool {
        if self.scores.contains_key(&node.id) {
            return false;
        }

        let score = Tag::of(node).base_score() + f64::from(classifier.class_weight(node));
        self.insert(node, score);
        true
    }

    /// Record a candidate with an explicit score, replacing any previous one.
    pub fn insert(&mut self, node: &NodeRef<'a>, score: f64) {
        if self.scores.insert(node.id, score).is_none() {
            self.candidates.push(*node);
        }
    }

    /// Add `delta` to an existing record; unscored elements are left alone.
    pub fn add(&mut self, id: NodeId, delta: f64) {
        if let Some(score) = self.scores.get_mut(&id) {
            *score += delta;
        }
    }

    /// Multiply an existing record by `factor`.
    pub fn scale(&mut self, id: NodeId, factor: f64) {
        if let Some(score) = self.scores.get_mut(&id) {
            *score *= factor;
        }
    }

    #[must_use]
    pub fn score(&self, id: NodeId) -> Option<f64> {
        self.scores.get(&id).copied()
    }

    /// Score of the element, 0 when it was never scored.
    #[must_use]
    pub fn score_or_zero(&self, id: NodeId) -> f64 {
        self.score(id).unwrap_or(0.0)
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.scores.contains_key(&id)
    }

    /// Candidates in initialization order.
    #[must_use]
    pub fn candidates(&self) -> &[NodeRef<'a>] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::flags::FlagSet;
    use crate::patterns::Patterns;

    #[test]
    fn test_initialize_uses_tag_base_and_class_weight() {
        let doc = dom::parse(r#"<div class="article">a</div><ul class="sidebar"><li>b</li></ul>"#);
        let patterns = Patterns::default();
        let classifier = Classifier::new(FlagSet::ALL, &patterns);
        let mut table = ScoreTable::new();

        let div = *doc.select("div").nodes().first().unwrap();
        let ul = *doc.select("ul").nodes().first().unwrap();

        assert!(table.initialize(&div, &classifier));
        assert!(table.initialize(&ul, &classifier));

        assert!((table.score(div.id).unwrap() - 30.0).abs() < f64::EPSILON);
        assert!((table.score(ul.id).unwrap() + 28.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_initialize_happens_once() {
        let doc = dom::parse("<div>a</div>");
        let patterns = Patterns::default();
        let classifier = Classifier::new(FlagSet::ALL, &patterns);
        let mut table = ScoreTable::new();
        let div = *doc.select("div").nodes().first().unwrap();

        table.initialize(&div, &classifier);
        table.add(div.id, 7.0);
        assert!(!table.initialize(&div, &classifier));

        assert!((table.score_or_zero(div.id) - 12.0).abs() < f64::EPSILON);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unscored_nodes_stay_unscored() {
        let doc = dom::parse("<div><p>one</p><p>two</p></div>");
        let mut table = ScoreTable::new();
        let nodes: Vec<_> = doc.select("p").nodes().to_vec();

        table.add(nodes[0].id, 3.0);
        table.scale(nodes[0].id, 0.5);

        assert!(table.is_empty());
        assert!(!table.contains(nodes[0].id));
        assert!(table.score_or_zero(nodes[1].id).abs() < f64::EPSILON);
    }

    #[test]
    fn test_candidates_keep_insertion_order() {
        let doc = dom::parse("<div><p>one</p><p>two</p><p>three</p></div>");
        let mut table = ScoreTable::new();
        let nodes: Vec<_> = doc.select("p").nodes().to_vec();

        table.insert(&nodes[2], 1.0);
        table.insert(&nodes[0], 2.0);
        table.insert(&nodes[2], 5.0);

        let order: Vec<_> = table.candidates().iter().map(|n| n.id).collect();
        assert_eq!(order, vec![nodes[2].id, nodes[0].id]);
        assert!((table.score_or_zero(nodes[2].id) - 5.0).abs() < f64::EPSILON);
    }
}
