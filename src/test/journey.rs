use crate::sim::{SimTime, Simulator};
use crate::test::support::Scripted;
use crate::theater::{Journey, ResourceKind, Resume, SimulationConfig, Stage, TheaterWorld};
use crate::trace::{TraceEventKind, TraceLogger};

fn world(config: &SimulationConfig, rng: Scripted) -> TheaterWorld {
    let mut w = TheaterWorld::new(config, Box::new(rng)).expect("world");
    w.trace = Some(TraceLogger::default());
    w
}

fn start(sim: &mut Simulator, ids: impl IntoIterator<Item = u64>) {
    for id in ids {
        sim.schedule_now(Resume {
            journey: Journey::new(id),
        });
    }
}

#[test]
fn new_journey_starts_arrived() {
    let j = Journey::new(7);
    assert_eq!(j.id(), 7);
    assert_eq!(j.stage(), Stage::Arrived);
    assert_eq!(j.arrival(), SimTime::ZERO);
}

#[test]
fn uncontended_journey_without_food_is_ticket_plus_check() {
    let config = SimulationConfig::default();
    let mut w = world(&config, Scripted::new(&[2], &[false]));
    let mut sim = Simulator::default();
    start(&mut sim, [0]);

    sim.run_until(SimTime(100.0), &mut w).expect("run");

    let samples = w.stats.samples();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].customer, 0);
    assert_eq!(samples[0].wait, 2.0 + 3.0 / 60.0);
    assert_eq!(samples[0].seated_at, SimTime(2.0 + 3.0 / 60.0));
    for kind in ResourceKind::ALL {
        assert_eq!(w.resource(kind).in_use(), 0);
    }
}

#[test]
fn food_branch_adds_the_server_hold() {
    let config = SimulationConfig::default();
    let mut w = world(&config, Scripted::new(&[1, 4], &[true]));
    let mut sim = Simulator::default();
    start(&mut sim, [0]);

    sim.run_until(SimTime(100.0), &mut w).expect("run");

    let samples = w.stats.samples();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].wait, 1.0 + 3.0 / 60.0 + 4.0);
    assert_eq!(w.server.stats().grants, 1);
}

#[test]
fn trace_follows_the_journey_stages() {
    let config = SimulationConfig::default();
    let mut w = world(&config, Scripted::new(&[3, 2], &[true]));
    let mut sim = Simulator::default();
    start(&mut sim, [0]);

    sim.run_until(SimTime(100.0), &mut w).expect("run");

    let trace = w.trace.as_ref().expect("trace");
    let kinds: Vec<&TraceEventKind> = trace.for_customer(0).map(|e| &e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            &TraceEventKind::Arrived,
            &TraceEventKind::Acquired {
                resource: ResourceKind::Cashier,
                in_use: 1
            },
            &TraceEventKind::Released {
                resource: ResourceKind::Cashier,
                in_use: 0
            },
            &TraceEventKind::Acquired {
                resource: ResourceKind::Usher,
                in_use: 1
            },
            &TraceEventKind::Released {
                resource: ResourceKind::Usher,
                in_use: 0
            },
            &TraceEventKind::FoodDecision { buys_food: true },
            &TraceEventKind::Acquired {
                resource: ResourceKind::Server,
                in_use: 1
            },
            &TraceEventKind::Released {
                resource: ResourceKind::Server,
                in_use: 0
            },
            &TraceEventKind::Seated {
                wait_min: 3.0 + 3.0 / 60.0 + 2.0
            },
        ]
    );
}

#[test]
fn contended_cashier_serialises_customers_and_hands_over_at_release_time() {
    let config = SimulationConfig::default();
    // 三位顾客买票分别 1、2、3 分钟，都不买零食
    let mut w = world(&config, Scripted::new(&[1, 2, 3], &[]));
    let mut sim = Simulator::default();
    start(&mut sim, [0, 1, 2]);

    sim.run_until(SimTime::ZERO, &mut w).expect("run");
    assert_eq!(w.cashier.in_use(), 1);
    assert_eq!(w.cashier.waiting(), 2);
    assert!(w.stats.is_empty());

    sim.run_until(SimTime(100.0), &mut w).expect("run");

    let check = 3.0 / 60.0;
    let got: Vec<(u64, f64)> = w.stats.samples().iter().map(|s| (s.customer, s.wait)).collect();
    assert_eq!(
        got,
        vec![(0, 1.0 + check), (1, 3.0 + check), (2, 6.0 + check)]
    );

    // 顾客 1 在顾客 0 归还收银台的同一时刻拿到它
    let trace = w.trace.as_ref().expect("trace");
    let handover = trace
        .for_customer(1)
        .find(|e| {
            e.kind
                == TraceEventKind::Acquired {
                    resource: ResourceKind::Cashier,
                    in_use: 1,
                }
        })
        .expect("customer 1 acquires cashier");
    assert_eq!(handover.t_min, 1.0);
}
