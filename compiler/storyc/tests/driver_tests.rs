//! End-to-end driver tests through the public API.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use story_ir::{IrCondition, IrStatement, IrValue, IrVariable, SymbolRef};
use storyc::testing::{give_xp_goal, MockParser};
use storyc::{CompilationContext, CompileError, ErrorCode, GoalId, Session, TypeTable};

#[test]
fn give_xp_goal_compiles_end_to_end() {
    storyc::init_tracing();
    let session = Session::new(
        MockParser::new().with_goal("give_xp.goal", give_xp_goal("GiveXP")),
        CompilationContext::with_builtins(),
    );

    let Ok(goal) = session.compile_goal(Path::new("give_xp.goal"), GoalId::new(0)) else {
        panic!("compilation failed");
    };

    assert_eq!(goal.init_section[0].database, SymbolRef::new("AtStart", 0));
    let rule = &goal.kb_section[0];
    assert_eq!(rule.variables.len(), 1);
    assert_eq!(rule.variables[0].name, "x");

    let x = IrValue::Variable(IrVariable { index: 0, ty: None });
    assert_eq!(
        rule.conditions,
        vec![IrCondition::Func {
            func: SymbolRef::new("HasItem", 1),
            not: false,
            params: vec![x.clone()],
        }]
    );
    assert_eq!(
        rule.actions,
        vec![IrStatement::Call {
            func: SymbolRef::new("GiveXP", 1),
            not: false,
            params: vec![x],
        }]
    );
    assert!(session.context().diagnostics().is_empty());
}

#[test]
fn batch_with_parse_failures_keeps_going() {
    let parser = MockParser::new()
        .with_goal("a.goal", give_xp_goal("A"))
        .with_goal("c.goal", give_xp_goal("C"));
    let session = Session::new(parser, CompilationContext::new(TypeTable::with_builtins()));
    let paths: Vec<PathBuf> = ["a.goal", "b.goal", "c.goal"]
        .into_iter()
        .map(PathBuf::from)
        .collect();

    let Ok(results) = session.compile_all(&paths) else {
        panic!("batch rejected");
    };

    let names: Vec<_> = results
        .iter()
        .map(|r| r.as_ref().map(|g| g.name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![
            Ok("A"),
            Err(&CompileError::ParseFailed {
                path: PathBuf::from("b.goal")
            }),
            Ok("C"),
        ]
    );
    assert_eq!(session.context().diagnostics().count_code(ErrorCode::E1001), 1);
}
