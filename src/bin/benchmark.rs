use chrono::{Duration as ChronoDuration, Utc};
use colored::*;
use governor::{Quota, RateLimiter};
use hdrhistogram::Histogram;
use reqwest::Client;
use serde_json::Value;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use uuid::Uuid;

const DURATION_SECS: u64 = 20;
const BASE_URL: &str = "http://localhost:8000";
const BENCH_PASSWORD: &str = "bench-secret";

struct Target {
    name: &'static str,
    method: &'static str,
    url: String,
    form: Option<Vec<(&'static str, String)>>,
}

#[tokio::main]
async fn main() {
    println!("{}", "🚀 Starting Benchmark Suite".bold().green());
    println!("Target URL: {}", BASE_URL);

    let client = Client::builder()
        .pool_max_idle_per_host(1000)
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    if client.get(format!("{}/health", BASE_URL)).send().await.is_err() {
        eprintln!("{}", "❌ Server is NOT reachable at localhost:8000. Please start it first.".red().bold());
        return;
    }

    println!("\n{}", "⚙️  Setting up benchmark data...".yellow());
    let (merchant_id, merchant_email) = setup_merchant(&client).await;
    setup_event(&client, merchant_id).await;

    println!("{}", "✅ Data created successfully.".green());
    println!("   Merchant ID: {}", merchant_id);
    println!("   Merchant:    {}", merchant_email);

    let targets = vec![
        Target {
            name: "Health Check (Public)",
            method: "GET",
            url: format!("{}/health", BASE_URL),
            form: None,
        },
        Target {
            name: "List Events (Public Read)",
            method: "GET",
            url: format!("{}/events", BASE_URL),
            form: None,
        },
        Target {
            name: "Merchant Dashboard (Aggregated Read)",
            method: "GET",
            url: format!("{}/merchant-events?merchantId={}", BASE_URL, merchant_id),
            form: None,
        },
        Target {
            name: "Login Flow (Credential Check)",
            method: "POST",
            url: format!("{}/merchants/login", BASE_URL),
            form: Some(vec![
                ("email", merchant_email.clone()),
                ("password", BENCH_PASSWORD.to_string()),
            ]),
        },
    ];

    let rps_stages = vec![10, 50, 200, 1000];

    for target in targets {
        println!("\n{}", "=".repeat(60));
        println!("Benchmarking Endpoint: {}", target.name.cyan().bold());
        println!("URL: {}", target.url);
        println!("{}", "=".repeat(60));

        println!("{:<10} | {:<15} | {:<15} | {:<15}", "RPS", "Mean (ms)", "P99 (ms)", "Success Rate");
        println!("{:-<10}-+-{:-<15}-+-{:-<15}-+-{:-<15}", "", "", "", "");

        for &rps in &rps_stages {
            run_stage(&client, &target, rps).await;
        }
    }
}

async fn setup_merchant(client: &Client) -> (i64, String) {
    let email = format!("bench-{}@example.com", Uuid::new_v4());
    let res = client.post(format!("{}/merchants/register", BASE_URL))
        .form(&[
            ("fullName", "Benchmark Merchant"),
            ("email", email.as_str()),
            ("phone", "0700000000"),
            ("idNumber", "00000000"),
            ("password", BENCH_PASSWORD),
            ("companyName", "Benchmark Corp"),
        ])
        .send()
        .await
        .expect("Failed to send merchant register request");

    if !res.status().is_success() {
        panic!("Failed to register merchant: status {}", res.status());
    }

    let body: Value = res.json().await.expect("Failed to parse register response");
    let id = body["data"]["id"].as_i64().expect("No merchant id");
    (id, email)
}

async fn setup_event(client: &Client, merchant_id: i64) {
    let event_date = (Utc::now() + ChronoDuration::days(30)).to_rfc3339();
    let res = client.post(format!("{}/events", BASE_URL))
        .form(&[
            ("organizerId", merchant_id.to_string().as_str()),
            ("venueName", "Benchmark Arena"),
            ("title", "Benchmark Concert"),
            ("description", "Load testing"),
            ("category", "music"),
            ("eventDate", event_date.as_str()),
            ("standardPrice", "5000"),
            ("vipPrice", "15000"),
        ])
        .send()
        .await
        .expect("Failed to create event");

    if !res.status().is_success() {
        let status = res.status();
        let txt = res.text().await.unwrap_or_default();
        panic!("Failed to create event data. Status: {}. Body: {}", status, txt);
    }
}

async fn run_stage(client: &Client, target: &Target, rps: u32) {
    let limiter = Arc::new(RateLimiter::direct(
        Quota::per_second(NonZeroU32::new(rps).unwrap())
    ));

    let (tx, mut rx) = mpsc::channel(50000);
    let start_time = Instant::now();
    let duration = Duration::from_secs(DURATION_SECS);

    loop {
        if start_time.elapsed() > duration {
            break;
        }

        if limiter.check().is_ok() {
            let client = client.clone();
            let url = target.url.clone();
            let form = target.form.clone();
            let method = target.method;
            let tx = tx.clone();

            tokio::spawn(async move {
                let req_start = Instant::now();
                let res = match method {
                    "GET" => client.get(&url).send().await,
                    "POST" => {
                        let mut req = client.post(&url);
                        if let Some(fields) = form {
                            req = req.form(&fields);
                        }
                        req.send().await
                    },
                    _ => client.get(&url).send().await,
                };
                let latency = req_start.elapsed();

                let success = match res {
                    Ok(r) => r.status().is_success(),
                    Err(_) => false,
                };

                let _ = tx.send((latency, success)).await;
            });
        } else {
            tokio::task::yield_now().await;
        }
    }

    drop(tx);

    let mut histogram = Histogram::<u64>::new(3).unwrap();
    let mut successes = 0;
    let mut total = 0;

    while let Some((latency, success)) = rx.recv().await {
        total += 1;
        if success { successes += 1; }
        histogram.record(latency.as_micros() as u64).unwrap();
    }

    let mean_ms = histogram.mean() / 1000.0;
    let p99_ms = histogram.value_at_quantile(0.99) as f64 / 1000.0;
    let success_rate = if total > 0 { (successes as f64 / total as f64) * 100.0 } else { 0.0 };

    println!(
        "{:<10} | {:<15.2} | {:<15.2} | {:<14.1}%",
        rps,
        mean_ms,
        p99_ms,
        success_rate
    );

    tokio::time::sleep(Duration::from_millis(500)).await;
}
