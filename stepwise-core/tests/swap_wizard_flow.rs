use stepwise_core::{
    Direction, Stepper, StepperError, SwapPhase, ValidationError,
};

fn amount_is_positive(amount: Option<&f64>) -> Result<(), ValidationError> {
    match amount {
        Some(value) if *value > 0.0 => Ok(()),
        Some(_) => Err(ValidationError::new("amount", "must be positive")),
        None => Err(ValidationError::new("amount", "enter an amount")),
    }
}

#[test]
fn form_review_done_happy_path() {
    let mut wizard: Stepper<SwapPhase, f64> = Stepper::swap();
    assert_eq!(wizard.current_phase(), SwapPhase::Form);

    let err = wizard.advance_phase(|| Err(ValidationError::new("pair", "x")));
    assert!(matches!(err, Err(StepperError::Validation(_))));
    assert_eq!(wizard.current_phase(), SwapPhase::Form);

    assert_eq!(wizard.advance_phase(|| Ok(())), Ok(SwapPhase::Review));
    assert_eq!(wizard.retreat_phase(), Ok(SwapPhase::Form));

    wizard.commit_input(5.8);
    assert_eq!(wizard.advance_phase(|| Ok(())), Ok(SwapPhase::Review));
    assert_eq!(wizard.committed_input(), Some(&5.8));
}

#[test]
fn validation_reads_committed_input() {
    let mut wizard: Stepper<SwapPhase, f64> = Stepper::swap();

    let committed = wizard.committed_input().copied();
    let err = wizard
        .advance_phase(|| amount_is_positive(committed.as_ref()))
        .unwrap_err();
    assert_eq!(
        err,
        StepperError::Validation(ValidationError::new(
            "amount",
            "enter an amount"
        ))
    );

    wizard.commit_input(-2.0);
    let committed = wizard.committed_input().copied();
    assert!(
        wizard
            .advance_phase(|| amount_is_positive(committed.as_ref()))
            .is_err()
    );
    assert_eq!(wizard.current_phase(), SwapPhase::Form);

    wizard.commit_input(0.25);
    let committed = wizard.committed_input().copied();
    assert_eq!(
        wizard.advance_phase(|| amount_is_positive(committed.as_ref())),
        Ok(SwapPhase::Review)
    );
    assert_eq!(wizard.committed_input(), Some(&0.25));
}

#[test]
fn edits_made_after_going_back_reach_review() {
    let mut wizard: Stepper<SwapPhase, f64> = Stepper::swap();
    wizard.commit_input(1.0);
    wizard.advance_phase(|| Ok(())).unwrap();
    wizard.retreat_phase().unwrap();
    wizard.commit_input(3.5);
    wizard.advance_phase(|| Ok(())).unwrap();
    assert_eq!(wizard.current_phase(), SwapPhase::Review);
    assert_eq!(wizard.committed_input(), Some(&3.5));
}

#[test]
fn done_is_terminal_and_form_is_initial() {
    let mut wizard: Stepper<SwapPhase, f64> = Stepper::swap();
    assert_eq!(wizard.retreat_phase(), Err(StepperError::InitialPhase));
    wizard.advance_phase(|| Ok(())).unwrap();
    wizard.advance_phase(|| Ok(())).unwrap();
    assert_eq!(wizard.current_phase(), SwapPhase::Done);
    assert_eq!(wizard.direction(), Direction::Forward);
    assert_eq!(
        wizard.advance_phase(|| Ok(())),
        Err(StepperError::TerminalPhase)
    );
    assert_eq!(wizard.progress(), (2, 3));
    assert_eq!(wizard.current_phase().to_string(), "Swap submitted");
}
