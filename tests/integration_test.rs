// Integration tests for the C-- renderer

use cmm_unparse::ast::*;
use cmm_unparse::errors::UnparseError;
use cmm_unparse::{write_program, Unparse};
use std::io;
use std::thread;

fn at(line: usize, column: usize) -> Position {
    Position::at(line, column)
}

fn int(value: i32) -> Expr {
    Expr::IntLit(value, at(1, 1))
}

fn ident(name: &str) -> Identifier {
    Identifier::new(name, at(1, 1))
}

fn var(kind: TypeKind, name: &str) -> VarDecl {
    VarDecl::new(TypeNode::new(kind, at(1, 1)), ident(name), at(1, 1))
}

/// int main() { int x; x = 3 + 4; report x; return 0; }
fn main_program() -> Program {
    let body = vec![
        var(TypeKind::Int, "x").into(),
        Stmt::assign(
            AssignExpr::new(
                LVal::id("x", at(1, 21)),
                Expr::binary(BinOp::Add, int(3), int(4), at(1, 25)),
                at(1, 21),
            ),
            at(1, 21),
        ),
        Stmt::write(Expr::id("x", at(1, 41)), at(1, 34)),
        Stmt::ret(Some(int(0)), at(1, 44)),
    ];
    let main = FnDecl::new(
        TypeNode::int(at(1, 1)),
        Identifier::new("main", at(1, 5)),
        None,
        body,
        at(1, 1),
    );
    Program::new(vec![main.into()], at(1, 1))
}

/// A program touching every statement form
fn kitchen_sink() -> Program {
    let counter = var(TypeKind::Int, "count");

    let bump = FnDecl::new(
        TypeNode::void(at(3, 1)),
        ident("bump"),
        Some(vec![var(TypeKind::Pointer, "p"), var(TypeKind::Short, "by")]),
        vec![
            Stmt::assign(
                AssignExpr::new(
                    LVal::deref(ident("p"), at(4, 2)),
                    Expr::binary(
                        BinOp::Add,
                        Expr::LVal(LVal::deref(ident("p"), at(4, 7))),
                        Expr::id("by", at(4, 12)),
                        at(4, 7),
                    ),
                    at(4, 2),
                ),
                at(4, 2),
            ),
            Stmt::ret(None, at(5, 2)),
        ],
        at(3, 1),
    );

    let main = FnDecl::new(
        TypeNode::int(at(8, 1)),
        ident("main"),
        Some(vec![]),
        vec![
            var(TypeKind::Bool, "done").into(),
            Stmt::read(LVal::id("count", at(10, 10)), at(10, 2)),
            Stmt::While {
                condition: Expr::binary(BinOp::Gt, Expr::id("count", at(11, 9)), int(0), at(11, 8)),
                body: vec![
                    Stmt::PostDec {
                        target: LVal::id("count", at(12, 3)),
                        location: at(12, 3),
                    },
                    Stmt::If {
                        condition: Expr::binary(
                            BinOp::Eq,
                            Expr::id("count", at(13, 8)),
                            int(5),
                            at(13, 7),
                        ),
                        body: vec![Stmt::write(
                            Expr::StrLit("\"halfway\"".to_string(), at(14, 10)),
                            at(14, 3),
                        )],
                        location: at(13, 3),
                    },
                ],
                location: at(11, 2),
            },
            Stmt::IfElse {
                condition: Expr::binary(
                    BinOp::And,
                    Expr::id("done", at(17, 6)),
                    Expr::True(at(17, 14)),
                    at(17, 5),
                ),
                then_body: vec![Stmt::call(
                    CallExpr::new(
                        ident("bump"),
                        Some(vec![
                            Expr::LVal(LVal::id("count", at(18, 8))),
                            Expr::ShortLit(2, at(18, 15)),
                        ]),
                        at(18, 3),
                    ),
                    at(18, 3),
                )],
                else_body: vec![Stmt::PostInc {
                    target: LVal::index(ident("rec"), ident("hits"), at(20, 3)),
                    location: at(20, 3),
                }],
                location: at(17, 2),
            },
            Stmt::ret(Some(Expr::False(at(22, 9))), at(22, 2)),
        ],
        at(8, 1),
    );

    Program::new(vec![counter.into(), bump.into(), main.into()], at(1, 1))
}

#[test]
fn test_simple_main() {
    let program = main_program();
    assert_eq!(
        program.to_string(),
        "int main() {\n\tint x;\n\tx = (3 + 4); \n\treport x; \n\treturn 0; \n\n}\n"
    );
}

#[test]
fn test_kitchen_sink() {
    let expected = concat!(
        "int count;\n",
        "void bump(ptr p, short by) {\n",
        "\t@p = (@p + by); \n",
        "\treturn; \n",
        "\n}\n",
        "int main() {\n",
        "\tbool done;\n",
        "\treceive count; \n",
        "\twhile (count > 0) {\n",
        "\t\tcount--; \n",
        "\t\tif ((count == 5)) {\n",
        "\t\treport \"halfway\"; \n",
        "\n}\n",
        "\n}\n",
        "\tif ((done && true)) {\n",
        "\t\tbump(count, 2);\n",
        "\n}\n",
        " else {\n",
        "\t\trec[hits]++; \n",
        "\n}\n",
        "\treturn false; \n",
        "\n}\n",
    );
    assert_eq!(kitchen_sink().to_string(), expected);
}

#[test]
fn test_rendering_is_deterministic() {
    let program = kitchen_sink();
    let first = program.to_string();
    let second = program.to_string();
    assert_eq!(first, second);
    assert_eq!(program.to_source(0), first);
}

#[test]
fn test_indent_applies_to_every_top_level_declaration() {
    let program = Program::new(
        vec![var(TypeKind::Int, "a").into(), var(TypeKind::String, "s").into()],
        at(1, 1),
    );
    assert_eq!(program.to_source(1), "\tint a;\n\tstring s;\n");
}

#[test]
fn test_write_program_matches_display() {
    let program = kitchen_sink();
    let mut buffer: Vec<u8> = Vec::new();
    write_program(&program, &mut buffer).expect("writing to a Vec failed");
    assert_eq!(String::from_utf8(buffer).unwrap(), program.to_string());
}

struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accepts at most `chunk` bytes per call and fails once `limit` bytes are taken
struct Trickle {
    taken: Vec<u8>,
    chunk: usize,
    limit: usize,
}

impl io::Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.taken.len() >= self.limit {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
        }
        let n = buf.len().min(self.chunk).min(self.limit - self.taken.len());
        self.taken.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_program_streams_in_small_chunks() {
    let program = kitchen_sink();
    let mut sink = Trickle {
        taken: Vec::new(),
        chunk: 3,
        limit: usize::MAX,
    };
    write_program(&program, &mut sink).expect("streaming write failed");
    assert_eq!(String::from_utf8(sink.taken).unwrap(), program.to_string());
}

#[test]
fn test_write_program_stops_at_first_io_error() {
    let program = kitchen_sink();
    let mut sink = Trickle {
        taken: Vec::new(),
        chunk: 64,
        limit: 20,
    };
    let err = write_program(&program, &mut sink).unwrap_err();
    match err {
        UnparseError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::WriteZero),
        other => panic!("Expected I/O error, got {:?}", other),
    }
    assert_eq!(sink.taken, program.to_string().as_bytes()[..20].to_vec());
}

#[test]
fn test_write_program_reports_sink_failure() {
    let err = write_program(&main_program(), &mut BrokenPipe).unwrap_err();
    match &err {
        UnparseError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("Expected I/O error, got {:?}", other),
    }
    assert!(err.to_string().contains("closed"));
}

#[test]
fn test_parallel_renders_share_one_tree() {
    let program = kitchen_sink();
    let expected = program.to_string();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| program.to_string())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_positions_survive_rendering() {
    let program = main_program();
    let Decl::Fn(main) = &program.decls[0] else {
        panic!("Expected function declaration");
    };
    assert_eq!(main.id.pos_str(), "1:5-1:5");
    assert_eq!(main.body[2].pos_str(), "1:34-1:34");

    assert_eq!(program.to_string(), main_program().to_string());
    assert_eq!(main.body[3].pos(), &at(1, 44));
}
