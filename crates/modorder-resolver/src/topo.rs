//! Deterministic topological sorting (Kahn's algorithm).

use std::collections::{BTreeMap, BTreeSet, HashMap};

use modorder_util::errors::ModError;

/// Queue key: lowest in-degree first, ties broken by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct NodePriority<'a> {
    in_degree: usize,
    name: &'a str,
}

/// Order the nodes of `successors` so that every node precedes all of its
/// successors.
///
/// `successors` maps a node to the nodes that must come after it. Nodes that
/// only appear as successors are ordered too. The output is fully determined
/// by the input: among ready nodes the alphabetically smallest goes first.
///
/// A cycle in the input is an internal consistency failure, since callers
/// only pass graphs the validator has already checked.
pub fn sort(successors: &BTreeMap<String, BTreeSet<String>>) -> Result<Vec<String>, ModError> {
    let mut in_degree: HashMap<&str, usize> = HashMap::new();
    for (node, next) in successors {
        in_degree.entry(node.as_str()).or_insert(0);
        for succ in next {
            *in_degree.entry(succ.as_str()).or_insert(0) += 1;
        }
    }

    let mut queue: BTreeSet<NodePriority<'_>> = in_degree
        .iter()
        .map(|(&name, &in_degree)| NodePriority { in_degree, name })
        .collect();

    let mut order = Vec::with_capacity(queue.len());
    while let Some(NodePriority { in_degree: degree, name }) = queue.pop_first() {
        if degree > 0 {
            let remaining: Vec<&str> = std::iter::once(name)
                .chain(queue.iter().map(|p| p.name))
                .collect();
            return Err(ModError::Consistency {
                message: format!(
                    "dependency cycle among already validated packages: {}",
                    remaining.join(", ")
                ),
            });
        }
        order.push(name.to_string());

        let Some(next) = successors.get(name) else {
            continue;
        };
        for succ in next {
            let Some(current) = in_degree.get_mut(succ.as_str()) else {
                continue;
            };
            queue.remove(&NodePriority {
                in_degree: *current,
                name: succ,
            });
            *current -= 1;
            queue.insert(NodePriority {
                in_degree: *current,
                name: succ,
            });
        }
    }

    tracing::trace!("topological order: {}", order.join(", "));
    Ok(order)
}
