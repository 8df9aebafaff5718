/*!
# `REPEAT`

## Purpose
Opens a loop closed by `UNTIL`.

## Remarks
The statements between `REPEAT` and `UNTIL` always run at least once.

## Example
```text
10 A=0
20 REPEAT
30 A=A+1
40 UNTIL A=3
50 PRINT A
RUN
3
```

*/
