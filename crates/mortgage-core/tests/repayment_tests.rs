use mortgage_core::repayment::{
    calculate_repayments, monthly_payment, RepaymentInput, RepaymentType,
};
use mortgage_core::MortgageError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Repayment calculation tests
// ===========================================================================

fn sample_repayment_mortgage() -> RepaymentInput {
    // A typical UK mortgage: £200,000 over 25 years at 5.25%
    RepaymentInput {
        amount: dec!(200_000),
        term_years: dec!(25),
        annual_interest_rate: dec!(5.25),
        repayment_type: RepaymentType::Repayment,
    }
}

#[test]
fn test_repayment_regression_fixture() {
    let input = sample_repayment_mortgage();
    let result = calculate_repayments(&input).unwrap();
    let out = &result.result;

    // r = 0.004375, n = 300: M = 875 / (1 - 1.004375^-300) ≈ 1198.50
    assert!(
        (out.monthly_payment - dec!(1198.50)).abs() < dec!(0.05),
        "Monthly payment: expected ~1198.50, got {}",
        out.monthly_payment
    );
    assert!(
        (out.total_payment - dec!(359_548.66)).abs() < dec!(20),
        "Total payment: expected ~359,548.66, got {}",
        out.total_payment
    );

    assert_eq!(out.number_of_payments, dec!(300));
    assert_eq!(out.monthly_rate, dec!(0.004375));
    assert_eq!(out.total_payment, out.monthly_payment * dec!(300));
}

#[test]
fn test_interest_only_independent_of_term() {
    let short = RepaymentInput {
        term_years: dec!(10),
        repayment_type: RepaymentType::InterestOnly,
        ..sample_repayment_mortgage()
    };
    let long = RepaymentInput {
        term_years: dec!(30),
        repayment_type: RepaymentType::InterestOnly,
        ..sample_repayment_mortgage()
    };

    let short_out = calculate_repayments(&short).unwrap().result;
    let long_out = calculate_repayments(&long).unwrap().result;

    // 200000 * 5.25 / 12 / 100 = 875 exactly, whatever the term
    assert_eq!(short_out.monthly_payment, dec!(875));
    assert_eq!(long_out.monthly_payment, short_out.monthly_payment);

    // Totals still scale with the number of instalments
    assert_eq!(short_out.total_payment, dec!(875) * dec!(120));
    assert_eq!(long_out.total_payment, dec!(875) * dec!(360));
}

#[test]
fn test_zero_rate_repayment() {
    let input = RepaymentInput {
        amount: dec!(120_000),
        term_years: dec!(10),
        annual_interest_rate: dec!(0),
        repayment_type: RepaymentType::Repayment,
    };
    let out = calculate_repayments(&input).unwrap().result;

    assert_eq!(out.monthly_payment, dec!(1000));
    assert_eq!(out.total_payment, dec!(120_000));
    assert_eq!(out.total_interest, Decimal::ZERO);
}

#[test]
fn test_total_interest_decomposition() {
    let repayment = calculate_repayments(&sample_repayment_mortgage())
        .unwrap()
        .result;
    assert_eq!(
        repayment.total_interest,
        repayment.total_payment - dec!(200_000)
    );

    let interest_only = RepaymentInput {
        repayment_type: RepaymentType::InterestOnly,
        ..sample_repayment_mortgage()
    };
    let out = calculate_repayments(&interest_only).unwrap().result;
    assert_eq!(out.total_interest, out.total_payment);
}

#[test]
fn test_monthly_payment_monotonic_in_rate() {
    let rates = [dec!(1), dec!(2.5), dec!(5.25), dec!(7), dec!(10)];
    let mut previous = Decimal::ZERO;
    for rate in rates {
        let monthly =
            monthly_payment(dec!(200_000), dec!(25), rate, RepaymentType::Repayment).unwrap();
        assert!(
            monthly > previous,
            "Payment at {rate}% ({monthly}) should exceed payment at the lower rate ({previous})"
        );
        previous = monthly;
    }
}

#[test]
fn test_monthly_payment_monotonic_in_term() {
    let terms = [dec!(10), dec!(15), dec!(20), dec!(25), dec!(30)];
    let mut previous_monthly = Decimal::MAX;
    let mut previous_total = Decimal::ZERO;
    for term in terms {
        let out = calculate_repayments(&RepaymentInput {
            term_years: term,
            ..sample_repayment_mortgage()
        })
        .unwrap()
        .result;

        // Longer term: smaller instalments, but more interest paid overall
        assert!(
            out.monthly_payment < previous_monthly,
            "Monthly payment at {term} years ({}) should be below the shorter term's ({previous_monthly})",
            out.monthly_payment
        );
        assert!(
            out.total_payment > previous_total,
            "Total payment at {term} years ({}) should exceed the shorter term's ({previous_total})",
            out.total_payment
        );
        previous_monthly = out.monthly_payment;
        previous_total = out.total_payment;
    }
}

#[test]
fn test_non_negative_over_constrained_domain() {
    let amounts = [dec!(50_000), dec!(200_000), dec!(1_000_000)];
    let terms = [dec!(5), dec!(25), dec!(40)];
    let rates = [dec!(0), dec!(3.99), dec!(25)];
    let types = [RepaymentType::Repayment, RepaymentType::InterestOnly];

    for amount in amounts {
        for term in terms {
            for rate in rates {
                for repayment_type in types {
                    let monthly = monthly_payment(amount, term, rate, repayment_type).unwrap();
                    assert!(
                        monthly >= Decimal::ZERO,
                        "Negative payment for amount={amount} term={term} rate={rate}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_idempotent_bit_identical() {
    let input = sample_repayment_mortgage();
    let first = calculate_repayments(&input).unwrap().result;
    let second = calculate_repayments(&input).unwrap().result;

    assert_eq!(first.monthly_payment, second.monthly_payment);
    assert_eq!(first.total_payment, second.total_payment);
    assert_eq!(first.total_interest, second.total_interest);
}

#[test]
fn test_fractional_term() {
    let input = RepaymentInput {
        term_years: dec!(12.5),
        ..sample_repayment_mortgage()
    };
    let out = calculate_repayments(&input).unwrap().result;
    assert_eq!(out.number_of_payments, dec!(150));
    assert_eq!(out.total_payment, out.monthly_payment * dec!(150));
}

// ===========================================================================
// Validation and warnings
// ===========================================================================

#[test]
fn test_validation_field_messages() {
    let zero_amount = RepaymentInput {
        amount: Decimal::ZERO,
        ..sample_repayment_mortgage()
    };
    match calculate_repayments(&zero_amount).unwrap_err() {
        MortgageError::InvalidInput { field, reason } => {
            assert_eq!(field, "amount");
            assert_eq!(reason, "Mortgage amount must be greater than 0");
        }
        e => panic!("Expected InvalidInput, got {e:?}"),
    }

    let zero_term = RepaymentInput {
        term_years: Decimal::ZERO,
        ..sample_repayment_mortgage()
    };
    match calculate_repayments(&zero_term).unwrap_err() {
        MortgageError::InvalidInput { field, .. } => assert_eq!(field, "term_years"),
        e => panic!("Expected InvalidInput, got {e:?}"),
    }

    let negative_rate = RepaymentInput {
        annual_interest_rate: dec!(-1),
        ..sample_repayment_mortgage()
    };
    match calculate_repayments(&negative_rate).unwrap_err() {
        MortgageError::InvalidInput { field, .. } => assert_eq!(field, "annual_interest_rate"),
        e => panic!("Expected InvalidInput, got {e:?}"),
    }
}

#[test]
fn test_interest_only_principal_warning() {
    let input = RepaymentInput {
        repayment_type: RepaymentType::InterestOnly,
        ..sample_repayment_mortgage()
    };
    let result = calculate_repayments(&input).unwrap();
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("remains outstanding")));
}

#[test]
fn test_long_term_warning() {
    let input = RepaymentInput {
        term_years: dec!(45),
        ..sample_repayment_mortgage()
    };
    let result = calculate_repayments(&input).unwrap();
    assert!(result.warnings.iter().any(|w| w.contains("45 years")));
}

#[test]
fn test_no_warnings_for_typical_mortgage() {
    let result = calculate_repayments(&sample_repayment_mortgage()).unwrap();
    assert!(result.warnings.is_empty(), "got {:?}", result.warnings);
}
