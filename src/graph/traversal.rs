//! Actor-to-actor separation over the bipartite graph
//!
//! BFS runs over actors only: from an actor we step into each of its movies
//! and out to every actor credited on that movie. One such step is one
//! "movie" of distance. Actors are marked visited, movies are not, so a
//! movie's cast is rescanned each time an unvisited actor reaches it.

use std::collections::VecDeque;

use tracing::debug;

use super::store::CastGraph;
use crate::error::{CastError, Result};

/// Number of movies separating two actors
///
/// Actors who share a movie are reported as `0`; one intermediate co-star
/// makes it `1`, and so on. The start actor is marked visited before the
/// search begins, so querying an actor against itself never reaches the
/// target and ends in [`CastError::NoPath`].
///
/// # Errors
/// * [`CastError::VertexNotFound`] if either label is not in the graph
/// * [`CastError::NoPath`] if the search exhausts without reaching `actor2`
pub fn separation(graph: &CastGraph, actor1: &str, actor2: &str) -> Result<usize> {
    let start = graph
        .get_node_index(actor1)
        .ok_or_else(|| CastError::VertexNotFound {
            label: actor1.to_string(),
        })?;
    let target = graph
        .get_node_index(actor2)
        .ok_or_else(|| CastError::VertexNotFound {
            label: actor2.to_string(),
        })?;

    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut distance = vec![0usize; n];
    let mut queue = VecDeque::new();

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for movie in graph.neighbor_indices(current) {
            for adjacent in graph.neighbor_indices(movie) {
                if visited[adjacent.index()] {
                    continue;
                }
                visited[adjacent.index()] = true;
                distance[adjacent.index()] = distance[current.index()] + 1;
                queue.push_back(adjacent);

                if adjacent == target {
                    return Ok(distance[adjacent.index()] - 1);
                }
            }
        }
    }

    debug!("No path found between {} and {}", actor1, actor2);
    Err(CastError::NoPath {
        from: actor1.to_string(),
        to: actor2.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::CastRecord;

    fn graph_of(credits: &[(&str, &str)]) -> CastGraph {
        CastGraph::from_records(
            credits
                .iter()
                .map(|(m, a)| CastRecord::new(m, a, "Supporting", "Male"))
                .collect(),
        )
    }

    fn chain() -> CastGraph {
        graph_of(&[
            ("MovieA", "Actor1"),
            ("MovieA", "Actor2"),
            ("MovieB", "Actor2"),
            ("MovieB", "Actor3"),
        ])
    }

    #[test]
    fn test_co_stars_are_zero_apart() {
        let g = chain();
        assert_eq!(separation(&g, "Actor1", "Actor2").unwrap(), 0);
        assert_eq!(separation(&g, "Actor2", "Actor3").unwrap(), 0);
    }

    #[test]
    fn test_one_movie_between() {
        let g = chain();
        assert_eq!(separation(&g, "Actor1", "Actor3").unwrap(), 1);
    }

    #[test]
    fn test_longer_chain_takes_shortest_route() {
        // A1 -M1- A2 -M2- A3 -M3- A4, plus a shortcut M4 joining A1 and A3
        let g = graph_of(&[
            ("M1", "A1"),
            ("M1", "A2"),
            ("M2", "A2"),
            ("M2", "A3"),
            ("M3", "A3"),
            ("M3", "A4"),
        ]);
        assert_eq!(separation(&g, "A1", "A4").unwrap(), 2);

        let mut shortcut = g.clone();
        shortcut.add_credit(CastRecord::new("M4", "A1", "Lead", "F"));
        shortcut.add_credit(CastRecord::new("M4", "A3", "Lead", "F"));
        assert_eq!(separation(&shortcut, "A1", "A4").unwrap(), 1);
    }

    #[test]
    fn test_symmetric() {
        let g = graph_of(&[
            ("M1", "A1"),
            ("M1", "A2"),
            ("M2", "A2"),
            ("M2", "A3"),
            ("M3", "A3"),
            ("M3", "A4"),
            ("M4", "A5"),
            ("M4", "A1"),
        ]);
        let actors = ["A1", "A2", "A3", "A4", "A5"];
        for a in actors {
            for b in actors {
                if a == b {
                    continue;
                }
                assert_eq!(
                    separation(&g, a, b).unwrap(),
                    separation(&g, b, a).unwrap(),
                    "{} / {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_self_query_finds_no_path() {
        let g = chain();
        let err = separation(&g, "Actor2", "Actor2").unwrap_err();
        assert!(matches!(err, CastError::NoPath { .. }));
    }

    #[test]
    fn test_disconnected_actors() {
        let g = graph_of(&[("M1", "A1"), ("M1", "A2"), ("M2", "B1"), ("M2", "B2")]);
        let err = separation(&g, "A1", "B2").unwrap_err();
        assert!(matches!(err, CastError::NoPath { .. }));
    }

    #[test]
    fn test_unknown_actor() {
        let g = chain();
        let err = separation(&g, "Actor1", "Nobody").unwrap_err();
        assert!(
            matches!(err, CastError::VertexNotFound { ref label } if label == "Nobody")
        );
        let err = separation(&g, "Nobody", "Actor1").unwrap_err();
        assert!(matches!(err, CastError::VertexNotFound { .. }));
    }

    #[test]
    fn test_duplicate_credits_do_not_change_distance() {
        let g = graph_of(&[
            ("MovieA", "Actor1"),
            ("MovieA", "Actor1"),
            ("MovieA", "Actor2"),
            ("MovieB", "Actor2"),
            ("MovieB", "Actor2"),
            ("MovieB", "Actor3"),
        ]);
        assert_eq!(g.separation("Actor1", "Actor3").unwrap(), 1);
    }
}
