use logos::Logos;

/// Tokens of the line-oriented mesh text format (`v`, `vt`, `f` directives).
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[error]
    Error,
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,

    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    #[token("\n")]
    Newline,

    // Directives
    // ----------------------------------------------------------------
    #[token("v")]
    KwVertex,
    #[token("vt")]
    KwTexCoord,
    #[token("f")]
    KwFace,

    /// Any other directive (`vn`, `o`, `g`, `s`, `usemtl`, ...). Its line is skipped.
    #[regex(r"[A-Za-z_][A-Za-z0-9_\.\-]*", |str| str.slice().to_owned())]
    Word(String),

    #[regex(r"[\-\+]?\d+(\.\d*)?", |str| str.slice().parse())]
    #[regex(r"[\-\+]?\.\d+", |str| str.slice().parse())]
    #[regex(r"[\-\+]?\d+(\.\d*)?[eE][\-\+]?\d+", |str| str.slice().parse())]
    Float(f32),

    /// A slash-separated face reference `i/t`, `i/t/n` or `i//n`, converted to 0-based
    /// `(vertex, texture coordinate)` indices.
    #[regex(r"\d+/\d*(/\d*)?", parse_face_ref)]
    FaceRef((usize, Option<usize>)),
}

fn parse_face_ref(lex: &mut logos::Lexer<Token>) -> Option<(usize, Option<usize>)> {
    let mut parts = lex.slice().split('/');
    let vertex = parts.next()?.parse::<usize>().ok()?.checked_sub(1)?;
    let tex_coord = match parts.next() {
        None | Some("") => None,
        Some(t) => Some(t.parse::<usize>().ok()?.checked_sub(1)?),
    };
    Some((vertex, tex_coord))
}

impl Token {
    /// Reads the token as a 0-based vertex reference with no texture coordinate.
    /// Plain face indices are lexed as numbers, so they are accepted here if they are positive
    /// whole numbers.
    pub fn as_face_ref(&self) -> Option<(usize, Option<usize>)> {
        match self {
            Token::FaceRef(r) => Some(*r),
            Token::Float(f) if *f >= 1.0 && f.fract() == 0.0 => Some((*f as usize - 1, None)),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            Token::Float(f) => Some(*f),
            _ => None,
        }
    }
}
