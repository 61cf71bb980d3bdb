//! Mesh assets: Wavefront OBJ parsing and the load-completion hook.
//!
//! Loading itself (HTTP fetch) is platform glue; this module only turns OBJ
//! text into a [`Mesh`] and installs a finished mesh into a [`Scene`].

use crate::core::scene::{Geometry, Material, Mesh, MeshSegment, Model, Scene, Transform, Vertex};
use glam::Vec3;
use smallvec::SmallVec;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ObjError {
    #[error("line {line}: expected {expected} numbers after '{keyword}'")]
    MissingComponents {
        line: usize,
        keyword: &'static str,
        expected: usize,
    },
    #[error("line {line}: invalid number '{token}'")]
    BadNumber { line: usize, token: String },
    #[error("line {line}: face needs at least 3 vertices")]
    DegenerateFace { line: usize },
    #[error("line {line}: {kind} index {index} out of range")]
    IndexOutOfRange {
        line: usize,
        kind: &'static str,
        index: i64,
    },
    #[error("no faces found")]
    Empty,
}

/// Why an asset never arrived. The completion hook only ever sees successes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("parse failed: {0}")]
    Parse(#[from] ObjError),
}

pub type LoadOutcome = Result<Mesh, LoadError>;

/// In-progress child segment while scanning the file.
struct Pending {
    name: String,
    vertices: Vec<Vertex>,
}

impl Pending {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            vertices: Vec::new(),
        }
    }
}

/// Parse OBJ text into a mesh with one child per object/group/material run.
///
/// Supports `v`, `vn`, `f` (with `v`, `v/vt`, `v/vt/vn`, `v//vn` and negative
/// indices, polygons fan-triangulated), `o`, `g` and `usemtl`. Faces without
/// normals get a flat face normal. Other statements are ignored.
pub fn parse_obj(src: &str) -> Result<Mesh, ObjError> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut children: SmallVec<[MeshSegment; 4]> = SmallVec::new();
    let mut current = Pending::named("default");

    let flush = |pending: &mut Pending, next: &str, out: &mut SmallVec<[MeshSegment; 4]>| {
        let done = std::mem::replace(pending, Pending::named(next));
        if !done.vertices.is_empty() {
            out.push(MeshSegment {
                name: done.name,
                geometry: Rc::new(Geometry::new(done.vertices)),
                material: None,
            });
        }
    };

    for (i, raw) in src.lines().enumerate() {
        let line = i + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        let mut tokens = text.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        match keyword {
            "v" => positions.push(parse_vec3(&mut tokens, line, "v")?),
            "vn" => normals.push(parse_vec3(&mut tokens, line, "vn")?),
            "o" | "g" | "usemtl" => {
                let name = tokens.collect::<Vec<_>>().join(" ");
                let name = if name.is_empty() {
                    current.name.clone()
                } else {
                    name
                };
                if current.vertices.is_empty() {
                    current.name = name;
                } else {
                    flush(&mut current, &name, &mut children);
                }
            }
            "f" => {
                let corners = tokens
                    .map(|t| parse_corner(t, line, positions.len(), normals.len()))
                    .collect::<Result<SmallVec<[(usize, Option<usize>); 4]>, _>>()?;
                if corners.len() < 3 {
                    return Err(ObjError::DegenerateFace { line });
                }
                for k in 1..corners.len() - 1 {
                    let tri = [corners[0], corners[k], corners[k + 1]];
                    let p = tri.map(|(vi, _)| positions[vi]);
                    let face_n = (p[1] - p[0]).cross(p[2] - p[0]).normalize_or_zero();
                    for (j, (_, ni)) in tri.iter().enumerate() {
                        let n = ni.map(|n| normals[n]).unwrap_or(face_n);
                        current.vertices.push(Vertex {
                            position: p[j].to_array(),
                            normal: n.to_array(),
                        });
                    }
                }
            }
            _ => {}
        }
    }
    flush(&mut current, "", &mut children);

    if children.is_empty() {
        return Err(ObjError::Empty);
    }
    Ok(Mesh { children })
}

fn parse_vec3<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: usize,
    keyword: &'static str,
) -> Result<Vec3, ObjError> {
    let mut out = [0.0f32; 3];
    for slot in &mut out {
        let token = tokens.next().ok_or(ObjError::MissingComponents {
            line,
            keyword,
            expected: 3,
        })?;
        *slot = token.parse().map_err(|_| ObjError::BadNumber {
            line,
            token: token.to_string(),
        })?;
    }
    Ok(Vec3::from_array(out))
}

/// Resolve a 1-based (or negative, relative) OBJ index into a 0-based one.
fn resolve_index(
    token: &str,
    len: usize,
    line: usize,
    kind: &'static str,
) -> Result<usize, ObjError> {
    let raw: i64 = token.parse().map_err(|_| ObjError::BadNumber {
        line,
        token: token.to_string(),
    })?;
    let idx = if raw < 0 { len as i64 + raw } else { raw - 1 };
    if raw == 0 || idx < 0 || idx >= len as i64 {
        return Err(ObjError::IndexOutOfRange {
            line,
            kind,
            index: raw,
        });
    }
    Ok(idx as usize)
}

fn parse_corner(
    token: &str,
    line: usize,
    n_positions: usize,
    n_normals: usize,
) -> Result<(usize, Option<usize>), ObjError> {
    let mut parts = token.split('/');
    let v = resolve_index(parts.next().unwrap_or(""), n_positions, line, "vertex")?;
    let _texcoord = parts.next();
    let n = match parts.next() {
        Some(t) if !t.is_empty() => Some(resolve_index(t, n_normals, line, "normal")?),
        _ => None,
    };
    Ok((v, n))
}

/// Page-side reactions to a finished load. Called once each, in order.
pub trait UiHooks {
    fn hide_loading_indicator(&mut self);
    fn set_tiles_visible(&mut self, visible: bool);
    fn enable_menu(&mut self);
}

/// Installs the loaded mesh. Consumed on use, so it can only fire once.
pub struct AssetLoadHook {
    pub material: Rc<Material>,
    pub scale: Vec3,
    pub rotation_y: f32,
}

impl AssetLoadHook {
    /// Scale, rotate and re-material the mesh, add it to the scene and run
    /// the UI hooks. Returns the new object's index in `scene.objects`.
    pub fn complete(self, scene: &mut Scene, mut mesh: Mesh, ui: &mut dyn UiHooks) -> usize {
        for child in &mut mesh.children {
            child.material = Some(self.material.clone());
        }
        log::info!(
            "[asset] installing mesh: segments={} vertices={}",
            mesh.children.len(),
            mesh.vertex_count()
        );
        let index = scene.add(Model {
            mesh,
            transform: Transform {
                scale: self.scale,
                rotation: Vec3::new(0.0, self.rotation_y, 0.0),
                ..Transform::default()
            },
        });
        ui.hide_loading_indicator();
        ui.set_tiles_visible(false);
        ui.enable_menu();
        index
    }
}
