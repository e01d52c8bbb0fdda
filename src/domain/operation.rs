use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationKind {
    Open { initial_balance: Decimal },
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
    Transfer { amount: Decimal, destination: String },
    Close,
    ResetDailyWithdrawal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub kind: OperationKind,
    pub holder: String,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            OperationKind::Open { initial_balance } => {
                write!(f, "open,holder={},amount={}", self.holder, initial_balance)
            }
            OperationKind::Deposit { amount } => {
                write!(f, "deposit,holder={},amount={}", self.holder, amount)
            }
            OperationKind::Withdraw { amount } => {
                write!(f, "withdraw,holder={},amount={}", self.holder, amount)
            }
            OperationKind::Transfer {
                amount,
                destination,
            } => write!(
                f,
                "transfer,holder={},amount={},target={}",
                self.holder, amount, destination
            ),
            OperationKind::Close => write!(f, "close,holder={}", self.holder),
            OperationKind::ResetDailyWithdrawal => write!(f, "reset,holder={}", self.holder),
        }
    }
}
