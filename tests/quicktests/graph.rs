use rbtree::graph::Graph;

use std::collections::HashSet;

/// Turns small numbers into names so casts share people often.
fn casts(raw: &[Vec<u8>]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|cast| cast.iter().map(|n| format!("p{}", n % 16)).collect())
        .collect()
}

#[quickcheck]
fn edges_are_symmetric(raw: Vec<Vec<u8>>) -> bool {
    let graph = Graph::new(&casts(&raw));

    casts(&raw).iter().flatten().all(|name| {
        graph.adjacent(name).unwrap().iter().all(|other| {
            graph
                .adjacent(other)
                .map_or(false, |back| back.contains(name))
        })
    })
}

#[quickcheck]
fn no_self_loops_or_repeats(raw: Vec<Vec<u8>>) -> bool {
    let graph = Graph::new(&casts(&raw));

    casts(&raw).iter().flatten().all(|name| {
        let adjacent = graph.adjacent(name).unwrap();
        let distinct: HashSet<_> = adjacent.iter().collect();
        !adjacent.contains(name) && distinct.len() == adjacent.len()
    })
}

#[quickcheck]
fn bfs_visits_each_vertex_once(raw: Vec<Vec<u8>>) -> bool {
    let casts = casts(&raw);
    let graph = Graph::new(&casts);

    match casts.iter().flatten().next() {
        None => graph.is_empty(),
        Some(start) => {
            let visit = graph.bfs(start).unwrap();
            let distinct: HashSet<_> = visit.order().iter().collect();
            visit.order()[0] == *start
                && distinct.len() == visit.order().len()
                && visit.order().len() <= graph.len()
        }
    }
}

#[quickcheck]
fn max_degree_is_the_largest(raw: Vec<Vec<u8>>) -> bool {
    let casts = casts(&raw);
    let graph = Graph::new(&casts);

    match graph.max_degree() {
        None => graph.is_empty(),
        Some(max) => casts
            .iter()
            .flatten()
            .all(|name| graph.degree_of(name).unwrap() <= max.degree)
            && max
                .names
                .iter()
                .all(|name| graph.degree_of(name) == Ok(max.degree)),
    }
}
