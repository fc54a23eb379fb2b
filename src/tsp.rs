//! Traveling salesman search by subtour elimination.
//!
//! Every subproblem is an assignment problem over the distance matrix with some arcs forbidden.
//! An optimal assignment is a permutation of the cities, i.e. a set of disjoint cycles. If it is a
//! single cycle it is a tour. Otherwise the shortest cycle is broken by branching once per arc of
//! that cycle, forbidding the arc in the child.

use alloc::vec;
use alloc::vec::Vec;

use serde::Serialize;

use crate::cost::Cost;
use crate::error::Error;
use crate::impls::default::DefaultSolver;
use crate::matrix::CostMatrix;
use crate::AssignmentSolver;

/// A closed tour through every city.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tour<C> {
    arcs: Vec<(usize, usize)>,
    cost: C,
    subproblems: usize,
}

impl<C: Copy> Tour<C> {
    /// The arcs of the tour, starting at city 0 and following successors.
    pub fn arcs(&self) -> &[(usize, usize)] {
        &self.arcs
    }

    pub fn cost(&self) -> C {
        self.cost
    }

    /// Number of assignment subproblems solved during the search.
    pub fn subproblems(&self) -> usize {
        self.subproblems
    }

    /// Cities in visiting order, starting at city 0.
    pub fn cities(&self) -> impl Iterator<Item = usize> + '_ {
        self.arcs.iter().map(|&(from, _)| from)
    }
}

/// Splits an assignment, read as a successor function, into its cycles.
///
/// Cycles are discovered in order of their smallest city and listed starting from it.
pub fn subtours(assignment: &[(usize, usize)]) -> Vec<Vec<(usize, usize)>> {
    let dim = assignment.len();
    let mut successor = vec![None; dim];
    for &(from, to) in assignment {
        if from < dim {
            successor[from] = Some(to);
        }
    }

    let mut visited = vec![false; dim];
    let mut cycles = Vec::new();
    for start in 0..dim {
        let mut cycle = Vec::new();
        let mut city = start;
        while !visited[city] {
            visited[city] = true;
            match successor[city] {
                Some(next) if next < dim => {
                    cycle.push((city, next));
                    city = next;
                }
                _ => break,
            }
        }
        if !cycle.is_empty() {
            cycles.push(cycle);
        }
    }
    cycles
}

/// Branch and bound over assignment relaxations.
#[derive(Clone, Debug)]
pub struct SubtourElimination<S> {
    solver: S,
}

impl<C> Default for SubtourElimination<DefaultSolver<C>> {
    fn default() -> Self {
        Self::new(DefaultSolver::new())
    }
}

impl<S> SubtourElimination<S> {
    pub fn new(solver: S) -> Self {
        Self { solver }
    }
}

impl<S, C> SubtourElimination<S>
where
    S: AssignmentSolver<Cost = C, Error = Error>,
    C: Cost,
{
    /// Finds a shortest tour for `distances`. The diagonal is ignored: staying in a city is never
    /// part of a tour.
    pub fn solve(&mut self, distances: &CostMatrix<C>) -> Result<Tour<C>, Error> {
        let mut base = distances.clone();
        for city in 0..base.dim() {
            base.forbid(city, city);
        }

        let mut problems = vec![base];
        let mut best: Option<(Vec<(usize, usize)>, C)> = None;
        let mut subproblems = 0;

        while let Some(problem) = problems.pop() {
            subproblems += 1;

            let solution = match self.solver.solve(&problem) {
                Ok(solution) => solution,
                Err(Error::Infeasible) => {
                    log::debug!("subproblem {subproblems}: infeasible, pruned");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let cost = solution.cost();
            if let Some((_, bound)) = &best {
                if !(cost < *bound) {
                    log::debug!("subproblem {subproblems}: bound {cost} not below {bound}, pruned");
                    continue;
                }
            }

            let mut cycles = subtours(solution.assignment());
            if cycles.len() == 1 {
                log::debug!("subproblem {subproblems}: new incumbent tour of cost {cost}");
                best = Some((cycles.swap_remove(0), cost));
                continue;
            }

            let shortest = cycles
                .into_iter()
                .min_by_key(Vec::len)
                .ok_or(Error::BrokenInvariant("assignment without cycles"))?;
            log::debug!(
                "subproblem {subproblems}: cost {cost}, branching on a subtour of {} arcs",
                shortest.len()
            );

            for &(from, to) in &shortest {
                let mut child = problem.clone();
                child.forbid(from, to);
                problems.push(child);
            }
        }

        let (arcs, cost) = best.ok_or(Error::NoTour)?;
        log::info!("tour of cost {cost} after {subproblems} subproblems");

        Ok(Tour {
            arcs,
            cost,
            subproblems,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtours_in_order_of_smallest_city() {
        let cycles = subtours(&[(0, 2), (1, 3), (2, 0), (3, 4), (4, 1)]);
        assert_eq!(
            cycles,
            vec![vec![(0, 2), (2, 0)], vec![(1, 3), (3, 4), (4, 1)]]
        );
    }

    #[test]
    fn single_cycle() {
        let cycles = subtours(&[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0], [(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn two_cities() {
        let distances = CostMatrix::new(vec![vec![0, 3], vec![4, 0]]).unwrap();
        let tour = SubtourElimination::new(DefaultSolver::new()).solve(&distances).unwrap();
        assert_eq!(tour.arcs(), &[(0, 1), (1, 0)]);
        assert_eq!(tour.cost(), 7);
        assert_eq!(tour.cities().collect::<Vec<_>>(), [0, 1]);
    }

    #[test]
    fn single_city_has_no_tour() {
        let distances = CostMatrix::new(vec![vec![0.0]]).unwrap();
        let err = SubtourElimination::new(DefaultSolver::new()).solve(&distances).unwrap_err();
        assert_eq!(err, Error::NoTour);
    }

    #[test]
    fn breaks_cheap_two_cycles() {
        // the assignment relaxation pairs {0, 1} and {2, 3}
        let distances = CostMatrix::new(vec![
            vec![0, 1, 9, 9],
            vec![1, 0, 9, 9],
            vec![9, 9, 0, 1],
            vec![9, 9, 1, 0],
        ])
        .unwrap();
        let tour = SubtourElimination::new(DefaultSolver::new()).solve(&distances).unwrap();
        assert_eq!(tour.cost(), 20);
        assert_eq!(tour.arcs().len(), 4);
        assert!(tour.subproblems() > 1);
    }
}
