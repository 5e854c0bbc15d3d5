use geometry::ray::Ray;
use math::hcm::Point3;
use thiserror::Error;

use crate::{intersect_triangle, Interaction, Shape};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("triangle index list has {0} entries, which is not a multiple of 3")]
    RaggedIndices(usize),
    #[error("triangle index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: usize, vertex_count: usize },
}

/// A flat-indexed triangle mesh: every 3 consecutive indices form one face, each index referring
/// into `positions`.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    positions: Vec<Point3>,
    indices: Vec<usize>,
}

impl TriangleMesh {
    /// Builds a mesh after checking that the index list groups into whole triangles and that every
    /// index is a valid vertex.
    pub fn try_new(positions: Vec<Point3>, indices: Vec<usize>) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::RaggedIndices(indices.len()));
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= positions.len()) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count: positions.len(),
            });
        }
        Ok(Self { positions, indices })
    }

    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates the vertex positions of each face, in index-list order.
    pub fn triangles(&self) -> impl Iterator<Item = (Point3, Point3, Point3)> + '_ {
        self.indices.chunks_exact(3).map(move |ijk| {
            (
                self.positions[ijk[0]],
                self.positions[ijk[1]],
                self.positions[ijk[2]],
            )
        })
    }
}

impl Shape for TriangleMesh {
    fn summary(&self) -> String {
        format!(
            "TriangleMesh{{ {} vertices, {} triangles }}",
            self.positions.len(),
            self.num_triangles()
        )
    }

    fn intersect(&self, r: &Ray, margin: f32) -> Option<Interaction> {
        let mut nearest: Option<Interaction> = None;
        for (p0, p1, p2) in self.triangles() {
            if let Some(hit) = intersect_triangle(p0, p1, p2, r, margin) {
                if nearest.map_or(true, |n| hit.ray_t < n.ray_t) {
                    nearest = Some(hit);
                }
            }
        }
        nearest
    }

    fn occludes(&self, r: &Ray, margin: f32) -> bool {
        self.triangles()
            .any(|(p0, p1, p2)| intersect_triangle(p0, p1, p2, r, margin).is_some())
    }
}
