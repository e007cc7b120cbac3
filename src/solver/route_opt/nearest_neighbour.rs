use crate::distance::matrix::dist_between;

/// Build an initial visiting order by repeatedly extending the partial
/// tour with the nearest unvisited stop. Strict `<` keeps the lowest
/// index on distance ties.
pub fn nearest_neighbour_tour(dm: &[Vec<f64>], start: usize) -> Vec<usize> {
    let n = dm.len();
    let mut tour = Vec::with_capacity(n);
    let mut visited = vec![false; n];

    tour.push(start);
    visited[start] = true;

    while tour.len() < n {
        let last = tour[tour.len() - 1];

        let mut nearest: Option<usize> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            match nearest {
                Some(best) if dist_between(last, candidate, dm) >= dist_between(last, best, dm) => {}
                _ => nearest = Some(candidate),
            }
        }

        match nearest {
            Some(next) => {
                visited[next] = true;
                tour.push(next);
            }
            None => break,
        }
    }

    tour
}
