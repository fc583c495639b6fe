//! Dashboard HTML template
//!
//! Contains the main page structure including:
//! - Header with last refresh time
//! - Performance and portfolio cards
//! - Cumulative return and daily P&L charts
//! - Recent trades and paged trade history tables
//!
//! Every element the renderers write to carries the id of its `Region`.

pub const TEMPLATE: &str = r#"
    <div class="container">
        <header>
            <div>
                <h1>Trading Bot Dashboard</h1>
                <span class="refresh-time" id="refreshTime">Loading...</span>
            </div>
        </header>

        <div class="grid">
            <!-- Performance Card -->
            <div class="card">
                <div class="card-header">
                    <span class="card-title">Performance</span>
                </div>
                <div class="metrics">
                    <div class="metric">
                        <div class="metric-label">Current Return (%)</div>
                        <div class="metric-value" id="currentProfitRate">--</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Current P&amp;L (KRW)</div>
                        <div class="metric-value" id="currentProfitLoss">--</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Cumulative Return (%)</div>
                        <div class="metric-value" id="cumulativeProfitRate">--</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Cumulative P&amp;L (KRW)</div>
                        <div class="metric-value" id="cumulativeProfitLoss">--</div>
                    </div>
                </div>
            </div>

            <!-- Portfolio Card -->
            <div class="card">
                <div class="card-header">
                    <span class="card-title">Portfolio</span>
                </div>
                <div class="metric-label">Total Investment (KRW)</div>
                <div class="card-value" id="totalInvestment">--</div>
                <ul class="holdings" id="portfolioList"></ul>
            </div>

            <!-- Charts -->
            <div class="card">
                <div class="card-header">
                    <span class="card-title">Cumulative Return</span>
                </div>
                <canvas id="cumulativeProfitChart"></canvas>
            </div>
            <div class="card">
                <div class="card-header">
                    <span class="card-title">Daily P&amp;L</span>
                </div>
                <canvas id="dailyProfitChart"></canvas>
            </div>

            <!-- Recent Trades -->
            <div class="card wide">
                <div class="card-header">
                    <span class="card-title">Recent Trades</span>
                </div>
                <table class="trades-table">
                    <thead>
                        <tr><th>Time</th><th>Action</th><th>Amount</th><th>Reason</th></tr>
                    </thead>
                    <tbody id="recentTradesTable"></tbody>
                </table>
            </div>

            <!-- Trade History -->
            <div class="card wide">
                <div class="card-header">
                    <span class="card-title">Trade History</span>
                </div>
                <table class="trades-table">
                    <thead>
                        <tr><th>Time</th><th>Action</th><th>Amount</th><th>Reason</th></tr>
                    </thead>
                    <tbody id="allTradesTable"></tbody>
                </table>
                <div class="pager">
                    <button class="btn btn-secondary" id="prevPage" disabled>Previous</button>
                    <span id="currentPage">Page 1</span>
                    <button class="btn btn-secondary" id="nextPage" disabled>Next</button>
                </div>
            </div>
        </div>
    </div>
"#;
