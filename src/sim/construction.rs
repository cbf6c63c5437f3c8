//! Queued construction projects and daily builder work.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Blueprint, Cost, ProjectKind};
use crate::config::BuilderPolicy;
use crate::error::Rejection;
use crate::sim::WorkerId;

/// Stable identifier for a queued project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// A paid-for construction waiting on builder-days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Assigned when queued.
    pub id: ProjectId,
    /// What is being built.
    pub kind: ProjectKind,
    /// What was paid for it.
    pub cost: Cost,
    /// Builder-days still needed. Always at least 1 while queued.
    pub days_left: u32,
    /// Builder pinned to this project, if any.
    pub builder: Option<WorkerId>,
}

impl Project {
    /// Display name of the project.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Projects in the order they were queued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructionQueue {
    projects: Vec<Project>,
    next_id: u32,
}

impl ConstructionQueue {
    /// An empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_id: 0,
        }
    }

    /// Queued projects, oldest first.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Look a project up by id.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Whether nothing is under construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// The project `worker` is pinned to, if any.
    #[must_use]
    pub fn pinned_project(&self, worker: WorkerId) -> Option<ProjectId> {
        self.projects
            .iter()
            .find(|p| p.builder == Some(worker))
            .map(|p| p.id)
    }

    /// Append a project with the blueprint's full duration. The cost must
    /// already have been paid.
    pub(crate) fn enqueue(&mut self, kind: ProjectKind, blueprint: &Blueprint) -> ProjectId {
        let id = ProjectId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.projects.push(Project {
            id,
            kind,
            cost: blueprint.cost,
            days_left: blueprint.days.max(1),
            builder: None,
        });
        id
    }

    /// Pin `worker` to `target`, or to the oldest project without a builder.
    ///
    /// A worker holds at most one pin; an earlier pin is released. Pinning to
    /// a specific project displaces whoever held it.
    pub(crate) fn pin(
        &mut self,
        worker: WorkerId,
        target: Option<ProjectId>,
    ) -> Result<ProjectId, Rejection> {
        let index = match target {
            Some(id) => self
                .projects
                .iter()
                .position(|p| p.id == id)
                .ok_or(Rejection::UnknownProjectId(id))?,
            None => self
                .projects
                .iter()
                .position(|p| p.builder.is_none() || p.builder == Some(worker))
                .ok_or(Rejection::NoOpenProject)?,
        };
        self.release(worker);
        let project = &mut self.projects[index];
        project.builder = Some(worker);
        Ok(project.id)
    }

    /// Drop any pin held by `worker`.
    pub(crate) fn release(&mut self, worker: WorkerId) {
        for project in &mut self.projects {
            if project.builder == Some(worker) {
                project.builder = None;
            }
        }
    }

    /// Drop every pin.
    pub(crate) fn release_all(&mut self) {
        for project in &mut self.projects {
            project.builder = None;
        }
    }

    /// Put one day of work into the queue with the given living builders.
    ///
    /// Finished projects are removed and returned oldest first.
    pub(crate) fn advance(&mut self, policy: BuilderPolicy, builders: &[WorkerId]) -> Vec<Project> {
        if builders.is_empty() || self.projects.is_empty() {
            return Vec::new();
        }

        let staffed = match policy {
            BuilderPolicy::Shared => vec![true; self.projects.len()],
            BuilderPolicy::OnePerProject => self.staff_one_per_project(builders),
        };

        for (project, worked) in self.projects.iter_mut().zip(staffed) {
            if worked {
                project.days_left = project.days_left.saturating_sub(1);
            }
        }

        let (finished, remaining): (Vec<_>, Vec<_>) =
            self.projects.drain(..).partition(|p| p.days_left == 0);
        self.projects = remaining;
        finished
    }

    /// Pinned builders serve their own project; the rest take the oldest
    /// projects nobody is working, one each.
    fn staff_one_per_project(&self, builders: &[WorkerId]) -> Vec<bool> {
        let mut staffed: Vec<bool> = self
            .projects
            .iter()
            .map(|p| p.builder.is_some_and(|b| builders.contains(&b)))
            .collect();

        let mut free = builders
            .iter()
            .filter(|b| self.projects.iter().all(|p| p.builder != Some(**b)));

        for worked in staffed.iter_mut().filter(|worked| !**worked) {
            if free.next().is_none() {
                break;
            }
            *worked = true;
        }
        staffed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn queue_of(kinds: &[ProjectKind]) -> ConstructionQueue {
        let catalog = Catalog::default();
        let mut queue = ConstructionQueue::new();
        for kind in kinds {
            queue.enqueue(*kind, catalog.blueprint(*kind));
        }
        queue
    }

    fn days_left(queue: &ConstructionQueue) -> Vec<u32> {
        queue.projects().iter().map(|p| p.days_left).collect()
    }

    #[test]
    fn test_enqueue_uses_blueprint_duration() {
        let queue = queue_of(&[ProjectKind::House, ProjectKind::Quarry]);
        assert_eq!(days_left(&queue), vec![3, 7]);
        assert_eq!(queue.projects()[1].id, ProjectId(1));
        assert_eq!(queue.projects()[1].cost, Cost::new(3, 5));
    }

    #[test]
    fn test_no_builders_no_progress() {
        let mut queue = queue_of(&[ProjectKind::House]);
        let finished = queue.advance(BuilderPolicy::Shared, &[]);
        assert!(finished.is_empty());
        assert_eq!(days_left(&queue), vec![3]);
    }

    #[test]
    fn test_shared_policy_advances_everything() {
        let mut queue = queue_of(&[ProjectKind::House, ProjectKind::Farm, ProjectKind::Quarry]);
        queue.advance(BuilderPolicy::Shared, &[WorkerId(0)]);
        assert_eq!(days_left(&queue), vec![2, 4, 6]);
    }

    #[test]
    fn test_one_per_project_is_fifo() {
        let mut queue = queue_of(&[ProjectKind::House, ProjectKind::Farm, ProjectKind::Quarry]);
        queue.advance(BuilderPolicy::OnePerProject, &[WorkerId(0), WorkerId(1)]);
        assert_eq!(days_left(&queue), vec![2, 4, 7]);
    }

    #[test]
    fn test_pinned_builder_serves_own_project() {
        let mut queue = queue_of(&[ProjectKind::House, ProjectKind::Farm, ProjectKind::Quarry]);
        let quarry = queue.projects()[2].id;
        queue.pin(WorkerId(5), Some(quarry)).unwrap();

        queue.advance(BuilderPolicy::OnePerProject, &[WorkerId(5), WorkerId(6)]);
        assert_eq!(days_left(&queue), vec![2, 5, 6]);
    }

    #[test]
    fn test_pin_to_dead_builder_counts_as_unstaffed() {
        let mut queue = queue_of(&[ProjectKind::House, ProjectKind::Farm]);
        queue.pin(WorkerId(9), None).unwrap();

        queue.advance(BuilderPolicy::OnePerProject, &[WorkerId(1)]);
        assert_eq!(days_left(&queue), vec![2, 5]);
    }

    #[test]
    fn test_completion_removes_project() {
        let mut queue = queue_of(&[ProjectKind::House, ProjectKind::Quarry]);
        let builders = [WorkerId(0)];
        assert!(queue.advance(BuilderPolicy::Shared, &builders).is_empty());
        assert!(queue.advance(BuilderPolicy::Shared, &builders).is_empty());

        let finished = queue.advance(BuilderPolicy::Shared, &builders);
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].kind, ProjectKind::House);
        assert_eq!(queue.projects().len(), 1);
        assert_eq!(queue.projects()[0].kind, ProjectKind::Quarry);
    }

    #[test]
    fn test_pin_picks_oldest_open_project() {
        let mut queue = queue_of(&[ProjectKind::House, ProjectKind::Farm]);
        assert_eq!(queue.pin(WorkerId(0), None), Ok(ProjectId(0)));
        assert_eq!(queue.pin(WorkerId(1), None), Ok(ProjectId(1)));
        assert_eq!(queue.pin(WorkerId(2), None), Err(Rejection::NoOpenProject));
        // Re-pinning keeps a builder on the project they already hold.
        assert_eq!(queue.pin(WorkerId(0), None), Ok(ProjectId(0)));
    }

    #[test]
    fn test_pin_moves_builder() {
        let mut queue = queue_of(&[ProjectKind::House, ProjectKind::Farm]);
        queue.pin(WorkerId(0), None).unwrap();
        queue.pin(WorkerId(0), Some(ProjectId(1))).unwrap();
        assert_eq!(queue.pinned_project(WorkerId(0)), Some(ProjectId(1)));
        assert_eq!(queue.projects()[0].builder, None);
    }

    #[test]
    fn test_pin_unknown_project() {
        let mut queue = queue_of(&[ProjectKind::House]);
        assert_eq!(
            queue.pin(WorkerId(0), Some(ProjectId(42))),
            Err(Rejection::UnknownProjectId(ProjectId(42)))
        );
    }

    #[test]
    fn test_empty_queue_has_no_open_project() {
        let mut queue = ConstructionQueue::new();
        assert_eq!(queue.pin(WorkerId(0), None), Err(Rejection::NoOpenProject));
    }
}
