mod common;
use common::*;
use sbasic::lang::ErrorCode;

#[test]
fn test_precedence() {
    assert_eq!(exec("PRINT 1+2*3\n"), "7\n");
    assert_eq!(exec("PRINT (1+2)*3\n"), "9\n");
    assert_eq!(exec("PRINT 2^3^2\n"), "512\n");
    assert_eq!(exec("PRINT -(2+3)\n"), "-5\n");
    assert_eq!(exec("PRINT 7%3\n"), "1\n");
}

#[test]
fn test_variables() {
    assert_eq!(exec("A=1+2*3\nPRINT A*2\n"), "14\n");
    assert_eq!(exec("A=2\nB=A=2\nPRINT B\n"), "1\n");
}

#[test]
fn test_power_truncates_exponent() {
    assert_eq!(exec("PRINT 2^3.9\n"), "8\n");
    assert_eq!(exec("PRINT 2^0\n"), "1\n");
    assert_eq!(exec("PRINT 2^-3\n"), "2\n");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(exec("PRINT 1/0\n"), "DIVISION BY ZERO IN LINE 1\n");
    assert_eq!(fail("A=0\nB=5%A\n"), Some(ErrorCode::DivisionByZero));
}

#[test]
fn test_unbalanced_parentheses() {
    assert_eq!(fail("PRINT (1+2\n"), Some(ErrorCode::UnbalancedParentheses));
}

#[test]
fn test_power_of_negative_zero() {
    assert_eq!(exec("PRINT (-0)^3\n"), "-0\n");
    assert_eq!(exec("PRINT (-0)^2\n"), "0\n");
}

#[test]
fn test_bad_number() {
    assert_eq!(fail("PRINT 12AB\n"), Some(ErrorCode::Syntax));
}
