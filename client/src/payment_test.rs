use super::*;

#[tokio::test]
async fn publishes_processing_then_success() {
    let mut states: Vec<PaymentState> = vec![];
    let next = PaymentProcessor::new(Timings::instant()).run(&mut states).await;
    assert_eq!(states, [PaymentState::Processing, PaymentState::Succeeded]);
    assert_eq!(next, Screen::OrderTracking);
}

#[tokio::test]
async fn running_twice_repeats_the_flow() {
    let processor = PaymentProcessor::new(Timings::instant());
    let mut states: Vec<PaymentState> = vec![];
    processor.run(&mut states).await;
    processor.run(&mut states).await;
    assert_eq!(states.len(), 4);
    assert_eq!(states[2], PaymentState::Processing);
}

#[test]
fn starts_idle() {
    assert_eq!(PaymentState::default(), PaymentState::Idle);
    assert_eq!(PaymentProcessor::default().timings, TIMINGS);
}
