//! Markdown output formatting.

use crate::models::{CollaboratorCandidate, Exploration, PaperRecord};

/// Format a full exploration as Markdown.
#[must_use]
pub fn format_exploration_markdown(exploration: &Exploration) -> String {
    let Some(seed) = exploration.nodes.first() else {
        return "No papers found.".to_string();
    };

    let mut output = format!(
        "# Paper Graph: {}\n\n\
         **Seed:** [{}]({})\n\
         **Papers:** {} | **Links:** {}\n\n\
         ---\n\n",
        seed.title_or_default(),
        seed.id,
        seed.link,
        exploration.nodes.len(),
        exploration.links.len()
    );

    output.push_str("## Suggested Collaborators\n\n");
    output.push_str(&format_collaborators_markdown(&exploration.collaborator_suggestions));

    output.push_str("\n## Papers\n\n");
    for (i, paper) in exploration.nodes.iter().enumerate() {
        output.push_str(&format_paper_markdown(paper, i + 1));
    }

    output
}

/// Format collaborator suggestions as a numbered list.
#[must_use]
pub fn format_collaborators_markdown(candidates: &[CollaboratorCandidate]) -> String {
    if candidates.is_empty() {
        return "*No collaborators found.*\n".to_string();
    }

    let mut output = String::new();
    for (i, candidate) in candidates.iter().enumerate() {
        output.push_str(&format!(
            "**{}. {}** - score {:.3}\n   - {}\n",
            i + 1,
            candidate.name,
            candidate.score,
            candidate.justification
        ));
    }
    output
}

/// Format a single paper as Markdown.
#[must_use]
pub fn format_paper_markdown(paper: &PaperRecord, index: usize) -> String {
    let mut output = format!("### {}. {}\n\n", index, paper.title_or_default());

    if !paper.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", paper.author_names()));
    }

    if !paper.categories.is_empty() {
        output.push_str(&format!("**Categories**: {}\n\n", paper.categories.join(", ")));
    }

    output.push_str(&format!("**arXiv**: [{}]({})\n\n", paper.id, paper.link));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Graph, PaperRecord};

    #[test]
    fn test_empty_exploration() {
        assert_eq!(format_exploration_markdown(&Exploration::default()), "No papers found.");
    }

    #[test]
    fn test_exploration_markdown() {
        let mut graph = Graph::new();
        graph.add_node(PaperRecord {
            id: "2101.00001".into(),
            title: "Seed Paper".into(),
            authors: vec!["Ada Lovelace".into()],
            link: "http://arxiv.org/abs/2101.00001v1".into(),
            categories: vec!["cs.AI".into()],
            ..Default::default()
        });
        let exploration = Exploration::new(
            graph,
            vec![CollaboratorCandidate {
                name: "Grace Hopper".into(),
                score: 0.5,
                justification: "Similar work.".into(),
            }],
        );

        let output = format_exploration_markdown(&exploration);
        assert!(output.contains("# Paper Graph: Seed Paper"));
        assert!(output.contains("**1. Grace Hopper** - score 0.500"));
        assert!(output.contains("**Categories**: cs.AI"));
    }
}
