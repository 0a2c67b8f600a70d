use super::*;
use pretty_assertions::assert_eq;
use story_diagnostic::ErrorCode;
use story_ir::{
    AstAction, AstCondition, AstConstant, AstFact, AstParentTargetEdge, AstRule, AstValue,
    ConstantKind, ConstantValue, IrCondition, IrConstant, IrRuleVariable, IrStatement, IrValue,
    IrVariable, RelOp, RuleType, Span, SymbolRef, TypeId,
};
use story_types::TypeTable;

fn rule(conditions: Vec<AstCondition>, actions: Vec<AstAction>) -> AstRule {
    AstRule {
        rule_type: RuleType::Rule,
        conditions,
        actions,
        span: Span::DUMMY,
    }
}

fn lower(ast: &AstGoal) -> (IrGoal, CompilationContext) {
    let ctx = CompilationContext::with_builtins();
    let Ok(goal) = lower_goal(ast, GoalId::new(3), &ctx) else {
        panic!("lowering failed");
    };
    (goal, ctx)
}

fn var(index: u32) -> IrValue {
    IrValue::Variable(IrVariable { index, ty: None })
}

/// `INIT AtStart(); KB IF HasItem(_X) THEN GiveXP(_X);`
fn give_xp_goal() -> AstGoal {
    let mut ast = AstGoal::new("GiveXPOnItem");
    ast.init_section.push(AstFact::new("AtStart", Vec::new()));
    ast.kb_section.push(rule(
        vec![AstCondition::func("HasItem", vec![AstValue::var("x")])],
        vec![AstAction::call("GiveXP", vec![AstValue::var("x")])],
    ));
    ast
}

#[test]
fn test_give_xp_scenario() {
    let (goal, ctx) = lower(&give_xp_goal());

    assert_eq!(goal.id, GoalId::new(3));
    assert_eq!(goal.name, "GiveXPOnItem");
    assert_eq!(goal.init_section.len(), 1);
    assert_eq!(goal.init_section[0].database, SymbolRef::new("AtStart", 0));
    assert!(goal.init_section[0].elements.is_empty());
    assert!(goal.exit_section.is_empty());
    assert!(goal.parent_target_edges.is_empty());

    assert_eq!(goal.kb_section.len(), 1);
    let rule = &goal.kb_section[0];
    assert_eq!(rule.goal, GoalId::new(3));
    assert_eq!(
        rule.variables,
        vec![IrRuleVariable {
            index: 0,
            name: "x".to_owned(),
            ty: None
        }]
    );
    assert_eq!(
        rule.conditions,
        vec![IrCondition::Func {
            func: SymbolRef::new("HasItem", 1),
            not: false,
            params: vec![var(0)],
        }]
    );
    assert_eq!(
        rule.actions,
        vec![IrStatement::Call {
            func: SymbolRef::new("GiveXP", 1),
            not: false,
            params: vec![var(0)],
        }]
    );
    assert!(ctx.diagnostics().is_empty());
}

#[test]
fn test_sections_keep_length_and_order() {
    let mut ast = AstGoal::new("Ordered");
    for name in ["DB_A", "DB_B", "DB_C"] {
        ast.init_section.push(AstFact::new(name, Vec::new()));
    }
    ast.exit_section.push(AstFact::new(
        "DB_Done",
        vec![AstConstant::new(ConstantValue::Integer(1))],
    ));
    for name in ["First", "Second"] {
        ast.kb_section.push(rule(
            vec![AstCondition::func(name, Vec::new())],
            Vec::new(),
        ));
    }
    ast.parent_target_edges
        .push(AstParentTargetEdge::new("Parent_A"));
    ast.parent_target_edges
        .push(AstParentTargetEdge::new("Parent_B"));

    let (goal, _) = lower(&ast);

    let init: Vec<_> = goal.init_section.iter().map(|f| f.database.name.as_str()).collect();
    assert_eq!(init, vec!["DB_A", "DB_B", "DB_C"]);
    assert_eq!(goal.exit_section[0].database, SymbolRef::new("DB_Done", 1));
    let rules: Vec<_> = goal
        .kb_section
        .iter()
        .filter_map(|r| match &r.conditions[0] {
            IrCondition::Func { func, .. } => Some(func.name.as_str()),
            IrCondition::Binary { .. } => None,
        })
        .collect();
    assert_eq!(rules, vec!["First", "Second"]);
    let parents: Vec<_> = goal.parent_target_edges.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(parents, vec!["Parent_A", "Parent_B"]);
}

#[test]
fn test_fact_constants_are_typed() {
    let mut ast = AstGoal::new("Facts");
    ast.init_section.push(AstFact::new(
        "DB_Reward",
        vec![
            AstConstant::new(ConstantValue::Integer(100)),
            AstConstant::new(ConstantValue::String("gold".to_owned())),
            AstConstant::new(ConstantValue::float(1.5)),
            AstConstant::new(ConstantValue::Name("S_Player_1234".to_owned())),
            AstConstant::new(ConstantValue::Integer(7)).with_type("INTEGER64"),
        ],
    ));

    let (goal, ctx) = lower(&ast);
    let types: Vec<_> = goal.init_section[0]
        .elements
        .iter()
        .map(|c| (c.ty, c.inferred_type))
        .collect();
    assert_eq!(
        types,
        vec![
            (Some(TypeId::INTEGER), true),
            (Some(TypeId::STRING), true),
            (Some(TypeId::REAL), true),
            (Some(TypeId::GUIDSTRING), true),
            (Some(TypeId::INTEGER64), false),
        ]
    );
    assert!(ctx.diagnostics().is_empty());
}

#[test]
fn test_unresolved_constant_type_is_not_fatal() {
    let mut ast = AstGoal::new("BadType");
    ast.kb_section.push(rule(
        vec![AstCondition::func(
            "DB_Count",
            vec![AstValue::Constant(
                AstConstant::new(ConstantValue::Integer(5))
                    .with_type("FOO")
                    .with_span(Span::new(30, 35)),
            )],
        )],
        vec![AstAction::goal_completed()],
    ));

    let (goal, ctx) = lower(&ast);

    let IrCondition::Func { params, .. } = &goal.kb_section[0].conditions[0] else {
        panic!("expected function condition");
    };
    assert_eq!(
        params[0],
        IrValue::Constant(IrConstant {
            value: ConstantValue::Integer(5),
            ty: None,
            inferred_type: false,
        })
    );
    let diagnostics = ctx.diagnostics().snapshot();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E2001);
    assert!(diagnostics[0].message.contains("FOO"));
}

#[test]
fn test_goal_completed_is_not_a_call() {
    let mut ast = AstGoal::new("Done");
    ast.kb_section.push(rule(
        vec![AstCondition::func("Finished", Vec::new())],
        vec![AstAction::call("Tick", Vec::new()), AstAction::goal_completed()],
    ));

    let (goal, _) = lower(&ast);
    let actions = &goal.kb_section[0].actions;
    assert_eq!(actions[0].func(), Some(&SymbolRef::new("Tick", 0)));
    assert_eq!(actions[1], IrStatement::GoalCompleted { goal: GoalId::new(3) });
    assert_eq!(actions[1].func(), None);
    assert!(actions[1].params().is_empty());
}

#[test]
fn test_binary_condition_passes_operator_through() {
    let mut ast = AstGoal::new("Compare");
    ast.kb_section.push(rule(
        vec![
            AstCondition::func("DB_Gold", vec![AstValue::typed_var("_Amount", "INTEGER")]),
            AstCondition::binary(
                AstValue::var("_Amount"),
                RelOp::GreaterOrEqual,
                AstValue::constant(ConstantValue::Integer(10)),
            ),
        ],
        Vec::new(),
    ));

    let (goal, _) = lower(&ast);
    let rule = &goal.kb_section[0];
    assert_eq!(
        rule.conditions[1],
        IrCondition::Binary {
            lvalue: IrValue::Variable(IrVariable {
                index: 0,
                ty: Some(TypeId::INTEGER)
            }),
            op: RelOp::GreaterOrEqual,
            rvalue: IrValue::Constant(IrConstant {
                value: ConstantValue::Integer(10),
                ty: Some(TypeId::INTEGER),
                inferred_type: true,
            }),
        }
    );
}

#[test]
fn test_variables_are_rule_local() {
    let mut ast = AstGoal::new("Scopes");
    ast.kb_section.push(rule(
        vec![AstCondition::func("A", vec![AstValue::var("_X"), AstValue::var("_Y")])],
        Vec::new(),
    ));
    ast.kb_section.push(rule(
        vec![AstCondition::func("B", vec![AstValue::var("_Y")])],
        Vec::new(),
    ));

    let (goal, _) = lower(&ast);
    assert_eq!(goal.kb_section[0].variables.len(), 2);
    assert_eq!(goal.kb_section[1].variables.len(), 1);
    assert_eq!(goal.kb_section[1].variables[0].name, "_Y");
    assert_eq!(goal.kb_section[1].variables[0].index, 0);
}

#[test]
fn test_variable_first_seen_in_action() {
    let mut ast = AstGoal::new("Late");
    ast.kb_section.push(rule(
        vec![AstCondition::func("Seen", vec![AstValue::var("_A")])],
        vec![AstAction::call(
            "Give",
            vec![AstValue::var("_B"), AstValue::var("_A")],
        )],
    ));

    let (goal, _) = lower(&ast);
    let rule = &goal.kb_section[0];
    let names: Vec<_> = rule.variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["_A", "_B"]);
    assert_eq!(rule.actions[0].params(), &[var(1), var(0)]);
}

#[test]
fn test_all_references_share_bound_type() {
    let mut ast = AstGoal::new("Typed");
    ast.kb_section.push(rule(
        vec![AstCondition::func(
            "HasItem",
            vec![AstValue::typed_var("_Item", "GUIDSTRING")],
        )],
        vec![AstAction::call("Drop", vec![AstValue::var("_Item")])],
    ));

    let (goal, _) = lower(&ast);
    let rule = &goal.kb_section[0];
    assert_eq!(rule.variables[0].ty, Some(TypeId::GUIDSTRING));
    assert_eq!(rule.actions[0].params()[0].ty(), Some(TypeId::GUIDSTRING));
}

#[test]
fn test_rule_type_is_preserved() {
    let mut ast = AstGoal::new("Procs");
    let mut proc = rule(Vec::new(), Vec::new());
    proc.rule_type = RuleType::Proc;
    ast.kb_section.push(proc);

    let (goal, _) = lower(&ast);
    assert_eq!(goal.kb_section[0].rule_type, RuleType::Proc);
}

#[test]
fn test_lowering_is_idempotent() {
    let mut ast = give_xp_goal();
    ast.exit_section.push(AstFact::new(
        "DB_Bad",
        vec![AstConstant::new(ConstantValue::Integer(1)).with_type("NOPE")],
    ));

    let ctx = CompilationContext::with_builtins();
    let first = lower_goal(&ast, GoalId::new(1), &ctx);
    let first_diagnostics = ctx.diagnostics().take();
    let second = lower_goal(&ast, GoalId::new(1), &ctx);
    let second_diagnostics = ctx.diagnostics().take();

    assert!(first.is_ok());
    assert_eq!(first, second);
    assert_eq!(first_diagnostics.len(), 1);
    assert_eq!(first_diagnostics, second_diagnostics);
}

#[test]
fn test_alias_annotation() {
    let mut types = TypeTable::with_builtins();
    let Ok(item) = types.register_alias("ITEMGUID", TypeId::GUIDSTRING) else {
        panic!("alias registration failed");
    };
    let ctx = CompilationContext::new(types);

    let mut ast = AstGoal::new("Alias");
    ast.kb_section.push(rule(
        vec![AstCondition::func(
            "HasItem",
            vec![AstValue::typed_var("_Item", "ITEMGUID")],
        )],
        Vec::new(),
    ));

    let Ok(goal) = lower_goal(&ast, GoalId::new(0), &ctx) else {
        panic!("lowering failed");
    };
    assert_eq!(goal.kb_section[0].variables[0].ty, Some(item));
}

#[test]
fn test_rebind_policy_option() {
    let mut ast = AstGoal::new("Rebind");
    ast.kb_section.push(rule(
        vec![
            AstCondition::func("A", vec![AstValue::typed_var("_X", "INTEGER")]),
            AstCondition::func("B", vec![AstValue::typed_var("_X", "STRING")]),
        ],
        Vec::new(),
    ));

    let quiet = CompilationContext::with_builtins();
    let Ok(goal) = lower_goal(&ast, GoalId::new(0), &quiet) else {
        panic!("lowering failed");
    };
    assert_eq!(goal.kb_section[0].variables[0].ty, Some(TypeId::INTEGER));
    assert!(quiet.diagnostics().is_empty());

    let loud = CompilationContext::with_builtins();
    let options = LowerOptions::default().with_rebind_policy(RebindPolicy::Warn);
    let Ok(warned) = lower_goal_with(&ast, GoalId::new(0), &loud, &options) else {
        panic!("lowering failed");
    };
    assert_eq!(warned, goal);
    assert_eq!(loud.diagnostics().count_code(ErrorCode::W2001), 1);
}

#[test]
fn test_missing_builtin_aborts_goal() {
    let ctx = CompilationContext::default();
    let mut ast = AstGoal::new("NoTypes");
    ast.init_section.push(AstFact::new(
        "DB_X",
        vec![AstConstant::new(ConstantValue::Integer(1))],
    ));

    assert_eq!(
        lower_goal(&ast, GoalId::new(0), &ctx),
        Err(LowerError::MissingBuiltin {
            id: TypeId::INTEGER,
            kind: ConstantKind::Integer
        })
    );
}

#[test]
fn test_lowered_goal_validates() {
    let (goal, _) = lower(&give_xp_goal());
    assert_eq!(crate::validate_goal(&goal), Ok(()));
}

#[test]
fn test_negation_is_preserved() {
    let mut ast = AstGoal::new("Negated");
    let mut retract = AstFact::new("DB_Started", Vec::new());
    retract.not = true;
    ast.exit_section.push(retract);

    let mut unless = AstCondition::func("HasItem", vec![AstValue::var("_Item")]);
    if let AstCondition::Func(func) = &mut unless {
        func.not = true;
    }
    let mut drop = AstAction::call("DB_Owned", vec![AstValue::var("_Item")]);
    if let AstAction::Call(call) = &mut drop {
        call.not = true;
    }
    ast.kb_section.push(rule(
        vec![AstCondition::func("Seen", vec![AstValue::var("_Item")]), unless],
        vec![AstAction::call("Give", vec![AstValue::var("_Item")]), drop],
    ));

    let (goal, _) = lower(&ast);

    assert!(goal.exit_section[0].not);
    let rule = &goal.kb_section[0];
    let negated: Vec<_> = rule
        .conditions
        .iter()
        .map(|c| matches!(c, IrCondition::Func { not: true, .. }))
        .collect();
    assert_eq!(negated, vec![false, true]);
    let negated: Vec<_> = rule
        .actions
        .iter()
        .map(|a| matches!(a, IrStatement::Call { not: true, .. }))
        .collect();
    assert_eq!(negated, vec![false, true]);
}
