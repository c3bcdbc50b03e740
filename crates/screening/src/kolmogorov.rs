//! Exact two-sided one-sample Kolmogorov-Smirnov distribution.
//!
//! Marsaglia, Tsang & Wang (2003), "Evaluating Kolmogorov's
//! Distribution": P(D_n < d) as a scaled power of an (2k-1)x(2k-1)
//! Hessenberg-like matrix. Exact for the small sample sizes screening
//! works with, where the asymptotic series is badly off.

/// P(D_n < d) for the two-sided one-sample KS statistic.
pub fn ks_cdf(n: usize, d: f64) -> f64 {
    if n == 0 || d <= 0.0 {
        return 0.0;
    }
    if d >= 1.0 {
        return 1.0;
    }

    let nf = n as f64;
    let nd = nf * d;
    let k = nd.ceil() as usize;
    let h = k as f64 - nd;
    let m = 2 * k - 1;

    let mut mat = vec![0.0f64; m * m];
    for i in 0..m {
        for j in 0..m {
            if i + 1 >= j {
                mat[i * m + j] = 1.0;
            }
        }
    }
    for i in 0..m {
        mat[i * m] -= h.powi(i as i32 + 1);
        mat[(m - 1) * m + i] -= h.powi((m - i) as i32);
    }
    if 2.0 * h - 1.0 > 0.0 {
        mat[(m - 1) * m] += (2.0 * h - 1.0).powi(m as i32);
    }
    for i in 0..m {
        for j in 0..m {
            if i + 1 > j {
                for g in 1..=(i + 1 - j) {
                    mat[i * m + j] /= g as f64;
                }
            }
        }
    }

    let (power, mut exponent) = mat_power(&mat, m, n);

    let mut s = power[(k - 1) * m + (k - 1)];
    for i in 1..=n {
        s = s * i as f64 / nf;
        if s < 1e-140 {
            s *= 1e140;
            exponent -= 140;
        }
    }
    s * 10f64.powi(exponent)
}

/// P(D_n >= d): the two-sided exact p-value.
pub fn ks_p_value(n: usize, d: f64) -> f64 {
    (1.0 - ks_cdf(n, d)).clamp(0.0, 1.0)
}

fn mat_multiply(a: &[f64], b: &[f64], m: usize) -> Vec<f64> {
    let mut out = vec![0.0f64; m * m];
    for i in 0..m {
        for j in 0..m {
            let mut s = 0.0;
            for g in 0..m {
                s += a[i * m + g] * b[g * m + j];
            }
            out[i * m + j] = s;
        }
    }
    out
}

/// Matrix power with decimal-exponent scaling to dodge overflow.
fn mat_power(a: &[f64], m: usize, n: usize) -> (Vec<f64>, i32) {
    if n == 1 {
        return (a.to_vec(), 0);
    }
    let (half, e_half) = mat_power(a, m, n / 2);
    let mut out = mat_multiply(&half, &half, m);
    let mut exponent = 2 * e_half;
    if n % 2 == 1 {
        out = mat_multiply(a, &out, m);
    }
    if out[(m / 2) * m + (m / 2)] > 1e140 {
        for v in &mut out {
            *v *= 1e-140;
        }
        exponent += 140;
    }
    (out, exponent)
}
