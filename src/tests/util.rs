use crate::util::BinaryOperator;

#[test]
fn operator_from_str() {
    assert_eq!("+".parse::<BinaryOperator>(), Ok(BinaryOperator::Add));
    assert_eq!("-".parse::<BinaryOperator>(), Ok(BinaryOperator::Sub));
    assert_eq!("*".parse::<BinaryOperator>(), Ok(BinaryOperator::Mul));
    assert_eq!("/".parse::<BinaryOperator>(), Ok(BinaryOperator::Div));
}

#[test]
fn operator_from_str_unknown() {
    let result = "%".parse::<BinaryOperator>();
    assert_eq!(result, Err("Unknown binary operator: %".to_owned()));
}

#[test]
fn operator_display() {
    let ops = [BinaryOperator::Add, BinaryOperator::Sub, BinaryOperator::Mul, BinaryOperator::Div];
    let strings: Vec<String> = ops.iter().map(|op| op.to_string()).collect();
    assert_eq!(strings, vec!["+", "-", "*", "/"]);
}

#[test]
fn operator_apply() {
    assert_eq!(BinaryOperator::Add.apply(1.5, 2.0), 3.5);
    assert_eq!(BinaryOperator::Sub.apply(1.5, 2.0), -0.5);
    assert_eq!(BinaryOperator::Mul.apply(1.5, 2.0), 3.0);
    assert_eq!(BinaryOperator::Div.apply(1.5, 2.0), 0.75);
}

#[test]
fn operator_apply_div_by_zero() {
    assert_eq!(BinaryOperator::Div.apply(-1.0, 0.0), f64::NEG_INFINITY);
    assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
}
