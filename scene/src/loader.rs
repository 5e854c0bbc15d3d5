use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, info};
use logos::Logos;
use thiserror::Error;

use crate::token::Token;
use math::hcm::{point3, vec2, Point3, Vec2};
use shape::{MeshError, TriangleMesh};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },
    #[error("invalid mesh: {0}")]
    Mesh(#[from] MeshError),
}

macro_rules! raise_syntax_error {
    ($line:expr, $($arg:tt)*) => {
        return Err(LoadError::Syntax {
            line: $line,
            message: format!($($arg)*),
        })
    };
}

/// Raw contents of a mesh file. Indices are 0-based; `tex_indices` runs parallel to `indices`.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<Point3>,
    pub tex_coords: Vec<Vec2>,
    pub indices: Vec<usize>,
    pub tex_indices: Vec<Option<usize>>,
}

impl MeshData {
    /// Validates the face indices and builds the intersectable mesh.
    pub fn into_mesh(self) -> Result<TriangleMesh, MeshError> {
        TriangleMesh::try_new(self.positions, self.indices)
    }

    fn consume_line(&mut self, tokens: &[Token], line: usize) -> Result<(), LoadError> {
        if tokens.contains(&Token::Error) && !matches!(tokens.first(), Some(Token::Word(_))) {
            raise_syntax_error!(line, "unrecognized characters in {:?}", tokens);
        }
        match tokens.split_first() {
            None => {}
            Some((Token::KwVertex, args)) => {
                let coords = Self::numbers(args, line, "v")?;
                if coords.len() != 3 && coords.len() != 4 {
                    raise_syntax_error!(line, "'v' takes 3 coordinates, got {}", coords.len());
                }
                self.positions.push(point3(coords[0], coords[1], coords[2]));
            }
            Some((Token::KwTexCoord, args)) => {
                let coords = Self::numbers(args, line, "vt")?;
                if coords.len() < 2 || coords.len() > 3 {
                    raise_syntax_error!(line, "'vt' takes 2 coordinates, got {}", coords.len());
                }
                self.tex_coords.push(vec2(coords[0], coords[1]));
            }
            Some((Token::KwFace, args)) => {
                let mut refs = Vec::with_capacity(args.len());
                for arg in args {
                    match arg.as_face_ref() {
                        Some(r) => refs.push(r),
                        None => raise_syntax_error!(line, "bad face reference {:?}", arg),
                    }
                }
                if refs.len() < 3 {
                    raise_syntax_error!(line, "face needs 3 vertices, got {}", refs.len());
                }
                // Polygons are split into a fan around their first vertex.
                let first = refs[0];
                for (b, c) in refs[1..].iter().tuple_windows() {
                    for (v, t) in [first, *b, *c] {
                        self.indices.push(v);
                        self.tex_indices.push(t);
                    }
                }
            }
            Some((Token::Word(directive), _)) => {
                debug!("line {}: skipping '{}'", line, directive);
            }
            Some((other, _)) => raise_syntax_error!(line, "unexpected {:?}", other),
        }
        Ok(())
    }

    fn numbers(args: &[Token], line: usize, directive: &str) -> Result<Vec<f32>, LoadError> {
        args.iter()
            .map(|t| {
                t.as_number().ok_or_else(|| LoadError::Syntax {
                    line,
                    message: format!("'{}' expects numbers, got {:?}", directive, t),
                })
            })
            .collect()
    }
}

/// Parses the text of a mesh file:
/// - `v x y z` adds a vertex position,
/// - `vt u v` adds a texture coordinate,
/// - `f a b c ...` adds a face; each reference is `i`, `i/t`, `i/t/n` or `i//n`, 1-based,
/// - other directives are skipped and `#` starts a comment.
pub fn parse_mesh(content: &str) -> Result<MeshData, LoadError> {
    let mut data = MeshData::default();
    let mut tokenizer = Token::lexer(content);
    let mut tokens = Vec::<Token>::new();
    let mut line = 1;
    loop {
        match tokenizer.next() {
            Some(Token::Newline) => {
                data.consume_line(&tokens, line)?;
                tokens.clear();
                line += 1;
            }
            Some(t) => tokens.push(t),
            None => {
                data.consume_line(&tokens, line)?;
                break;
            }
        }
    }
    Ok(data)
}

/// Reads and parses the mesh file at `path`.
pub fn load_mesh<P: AsRef<Path>>(path: P) -> Result<MeshData, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = parse_mesh(&content)?;
    info!(
        "Model loaded: {} ({} vertices, {} triangles)",
        path.display(),
        data.positions.len(),
        data.indices.len() / 3
    );
    Ok(data)
}
